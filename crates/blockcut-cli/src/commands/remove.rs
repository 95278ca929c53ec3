//! The `remove` command

use blockcut_fs::{load_document, save_document};
use blockcut_span::remove;
use colored::Colorize;

use super::prepare;
use crate::cli::Selection;
use crate::error::Result;

/// Resolve the block, delete it and write the document back.
///
/// Nothing is written unless the span resolves.
pub fn run_remove(selection: &Selection, dry_run: bool) -> Result<()> {
    let (path, resolver) = prepare(selection)?;
    let mut document = load_document(&path)?;

    let span = resolver.resolve(document.lines())?;
    println!("Removing lines {} to {}", span.start, span.end);

    if dry_run {
        println!(
            "{} {} line(s) would be removed from {}",
            "[dry-run]".yellow(),
            span.line_count(),
            path
        );
        return Ok(());
    }

    let removed = remove(document.lines_mut(), span)?;
    save_document(&path, &document)?;
    tracing::info!(%path, removed = removed.len(), "block removed");

    println!("Successfully removed block");
    Ok(())
}
