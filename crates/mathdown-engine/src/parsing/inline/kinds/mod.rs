//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters.
//!
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `STAR = b'*'`, only when the star stands alone
//! - **`CodeSpan`**: `TICK = b'\`'`
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use strong::Strong;
