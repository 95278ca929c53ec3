//! Line-oriented documents.
//!
//! A [`Document`] keeps every line together with its own terminator, so
//! joining the lines back reproduces the original bytes exactly. Lines that
//! are not edited survive a load/save cycle untouched, whatever mix of `\n`
//! and `\r\n` the file uses.

use crate::{NormalizedPath, Result, io};

/// An ordered sequence of lines, each including its trailing terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into lines, keeping terminators attached.
    ///
    /// The final line has no terminator when the text does not end in one.
    ///
    /// # Example
    /// ```
    /// use blockcut_fs::Document;
    ///
    /// let doc = Document::from_text("a\r\nb\nc");
    /// assert_eq!(doc.lines(), ["a\r\n", "b\n", "c"]);
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines back into a single string.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Read a document from disk.
///
/// # Errors
/// Returns `Error::Io` if the file is missing, unreadable or not UTF-8.
pub fn load_document(path: &NormalizedPath) -> Result<Document> {
    let text = io::read_text(path)?;
    let doc = Document::from_text(&text);
    tracing::debug!(%path, lines = doc.len(), "loaded document");
    Ok(doc)
}

/// Write a document back to disk atomically.
pub fn save_document(path: &NormalizedPath, document: &Document) -> Result<()> {
    io::write_text(path, &document.to_text())
}
