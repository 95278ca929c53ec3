//! blockcut CLI
//!
//! Removes an indentation-matched block of lines from a document in place.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        println!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Remove { selection, dry_run } => commands::run_remove(&selection, dry_run),
        Commands::Show { selection } => commands::run_show(&selection),
    }
}
