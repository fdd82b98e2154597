use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory under which the relative track paths are resolved
    #[clap(value_name = "BASE_PATH", required_unless_present = "completions")]
    pub base_path: Option<PathBuf>,

    /// File with newline-separated relative track paths, replacing the built-in list
    #[clap(long, value_name = "FILE")]
    pub track_list: Option<PathBuf>,

    /// Generate shell completions and exit
    #[clap(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn base_path_is_positional() {
        let cli = Cli::parse_from(["audio-durations", "/media"]);
        assert_eq!(Some(PathBuf::from("/media")), cli.base_path);
        assert!(cli.track_list.is_none());
        assert!(cli.completions.is_none());
    }

    #[test]
    fn base_path_is_not_required_for_completions() {
        let cli = Cli::parse_from(["audio-durations", "--completions", "zsh"]);
        assert!(cli.base_path.is_none());
        assert!(cli.completions.is_some());
    }
}
