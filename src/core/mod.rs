use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::console_print;
use crate::util::audio_file_duration;
use crate::util::console::Console;

pub struct Args {
    pub base_path: PathBuf,
    pub tracks: Vec<String>,
}

/// Probes every track in list order and prints one report line per track.
/// A track that cannot be probed produces an error line; it never aborts the run.
pub fn work(args: Args, console: &Console) -> Result<()> {
    for track in &args.tracks {
        console_print!(console, "{}", report_line(&args.base_path, track));
    }
    Ok(())
}

fn report_line(base_path: &Path, track: &str) -> String {
    match audio_file_duration::from_path(base_path.join(track)) {
        Ok(duration) => format!("{}: {} seconds", track, duration.as_secs_f64()),
        Err(_) => format!("Error: Could not load {}", track),
    }
}
