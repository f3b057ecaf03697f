//! # Inline Parsing
//!
//! Cursor-based tokenizer for bold, italic and inline code.
//!
//! ## Architecture
//!
//! Inline parsing runs after equations have been swapped for placeholders, so
//! a `*` inside `$x*y$` is never seen here. The scanner looks for the
//! earliest-starting construct; when two could start at the same byte the
//! order is bold, code, italic.
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` enum (Text, Bold, Italic, Code) over spans
//! - **`kinds`**: inline types with owned delimiters (Strong, Emphasis, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans and the content of bold/italic runs are not re-scanned, so runs
//! never nest: `**a*b*c**` is one bold run containing `a*b*c`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize_inline;
pub use types::InlineToken;
