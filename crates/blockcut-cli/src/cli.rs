//! CLI argument parsing using clap derive

use blockcut_span::{RemovalJob, StrategyKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// blockcut - remove an indentation-matched block of lines from a document
#[derive(Parser, Debug)]
#[command(name = "blockcut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Remove a block and rewrite the document in place
    ///
    /// The block starts at the first line containing the start marker and
    /// ends at the first line, before the boundary marker, that is exactly
    /// the indent followed by the closing token.
    ///
    /// Examples:
    ///   blockcut remove Panel.tsx -s '{/* Actions */}' -b '{/* Answer */}' -w 32
    ///   blockcut remove --config cut.toml --dry-run
    Remove {
        #[command(flatten)]
        selection: Selection,

        /// Resolve and report the span without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the lines a removal would delete
    Show {
        #[command(flatten)]
        selection: Selection,
    },
}

/// Which block to act on. Flags override values from `--config`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Document to edit
    #[arg(env = "BLOCKCUT_FILE")]
    pub file: Option<PathBuf>,

    /// Job file (.toml, .json, .yaml) with the removal settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Text identifying the first line of the block
    #[arg(short, long = "start")]
    pub start_marker: Option<String>,

    /// Text identifying the line the block must end before
    #[arg(short, long = "boundary")]
    pub boundary_marker: Option<String>,

    /// Exact leading whitespace of the block's closing line
    #[arg(long, conflicts_with = "indent_width")]
    pub indent: Option<String>,

    /// Closing-line indent as a number of spaces
    #[arg(short = 'w', long)]
    pub indent_width: Option<usize>,

    /// Closing token of the block [default: </div>]
    #[arg(long = "closing")]
    pub closing_token: Option<String>,

    /// How the closing line is chosen: first or balanced
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Opening token counted by the balanced strategy
    #[arg(long = "open")]
    pub open_token: Option<String>,

    /// Text the line after the start marker should contain (warns if not)
    #[arg(long)]
    pub expect_opening: Option<String>,
}

impl Selection {
    /// The command-line values as a job, for merging over a job file.
    pub fn to_job(&self) -> RemovalJob {
        RemovalJob {
            file: self.file.clone(),
            start_marker: self.start_marker.clone(),
            boundary_marker: self.boundary_marker.clone(),
            indent: self.indent.clone(),
            indent_width: self.indent_width,
            closing_token: self.closing_token.clone(),
            strategy: self.strategy,
            open_token: self.open_token.clone(),
            expect_opening: self.expect_opening.clone(),
        }
    }
}
