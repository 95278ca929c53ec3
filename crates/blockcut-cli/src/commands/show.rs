//! The `show` command

use blockcut_fs::load_document;
use colored::Colorize;

use super::prepare;
use crate::cli::Selection;
use crate::error::Result;

/// Print the span and the lines it covers. Never writes.
pub fn run_show(selection: &Selection) -> Result<()> {
    let (path, resolver) = prepare(selection)?;
    let document = load_document(&path)?;
    let span = resolver.resolve(document.lines())?;

    let range = span.display_range();
    println!(
        "{}: lines {}-{} ({} lines, boundary at line {})",
        path.to_string().bold(),
        range.start(),
        range.end(),
        span.line_count(),
        span.boundary + 1
    );

    let width = range.end().to_string().len();
    for (number, line) in range.zip(&document.lines()[span.start..=span.end]) {
        let gutter = format!("{number:>width$} |");
        println!("{} {}", gutter.dimmed(), line.trim_end_matches(['\n', '\r']));
    }
    Ok(())
}
