//! # Math
//!
//! Equation handling in two independent steps:
//!
//! - **`extract`**: cuts `$$...$$` and `$...$` regions out of block text and
//!   leaves an opaque marker plus a side table, so the inline formatter never
//!   sees math source
//! - **`transcode`**: turns captured LaTeX-style source into a Unicode
//!   approximation using the tables in **`symbols`**
//!
//! This is not typesetting. Anything the tables don't know passes through
//! with its backslash removed.

pub mod extract;
pub mod symbols;
pub mod transcode;

pub use extract::{EquationPlaceholder, Extracted, extract_equations};
pub use transcode::transcode;
