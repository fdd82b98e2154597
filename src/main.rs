use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::cli::Cli;
use crate::util::console::Console;

mod cli;
mod core;
mod track_list;
mod util;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let bin_name = command.get_name().to_string();
        generate(shell, &mut command, bin_name, &mut io::stdout());
        return Ok(());
    }

    let base_path = cli.base_path.context("BASE_PATH is required")?;
    let tracks = match &cli.track_list {
        Some(path) => track_list::from_file(path)?,
        None => track_list::built_in(),
    };

    let console = Console::new();
    core::work(core::Args { base_path, tracks }, &console)
}
