//! Block span resolution and removal for blockcut.
//!
//! A block is a run of lines that starts at the first line containing a
//! *start marker* and ends at its own closing line. The closing line is the
//! first line, before the *boundary marker*, whose content is exactly the
//! caller's indent prefix followed by the closing token:
//!
//! ```text
//! A
//! {/* Mode Toggle */}        <- start marker (removed)
//!   <div>                    <- removed
//!     <div>                  <- removed
//!     </div>                 <- deeper indent, not the end
//!   </div>                   <- indent + closing token: end of block (removed)
//! B                          <- kept
//! {/* Answer Area */}        <- boundary marker (kept)
//! ```
//!
//! Deeper-indented closing lines fail the exact comparison, which is what
//! keeps nested constructs from ending the block early. Callers that cannot
//! rely on indentation alone can switch to [`MatchStrategy::Balanced`], which
//! also tracks open/close depth.
//!
//! # Example
//! ```
//! use blockcut_span::{IndentPrefix, SpanResolver, remove_block};
//!
//! let text = "A\nSTART\n  <div>\n    <btn/>\n  </div>\nB\nEND\n";
//! let resolver = SpanResolver::new("START", "END", IndentPrefix::spaces(2).unwrap());
//!
//! let removal = remove_block(text, &resolver).unwrap();
//! assert_eq!((removal.span.start, removal.span.end), (1, 4));
//! assert_eq!(removal.content, "A\nB\nEND\n");
//! ```

pub mod error;
pub mod indent;
pub mod job;
pub mod remover;
pub mod resolver;
pub mod span;

pub use error::{Error, MarkerKind, Result};
pub use indent::IndentPrefix;
pub use job::{RemovalJob, StrategyKind};
pub use remover::{Removal, remove, remove_block};
pub use resolver::{DEFAULT_CLOSING_TOKEN, MatchStrategy, SpanResolver, resolve};
pub use span::Span;
