//! Filesystem layer for blockcut
//!
//! Loads documents as terminator-preserving line sequences, saves them back
//! atomically, and reads job files in TOML, JSON or YAML.

pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use document::{Document, load_document, save_document};
pub use error::{Error, Result};
pub use path::NormalizedPath;
