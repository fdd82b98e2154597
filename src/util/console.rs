use console::Term;

#[macro_export]
macro_rules! console_print {
    ($console:expr, $($arg:tt)*) => ({
        $console.println(&format!($($arg)*));
    })
}

pub struct Console {
    term: Term,
}

impl Console {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn println(&self, str: &str) {
        self.term.write_line(str).unwrap()
    }
}
