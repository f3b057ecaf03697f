pub mod lines;
pub mod span;

pub use lines::{LineRef, physical_lines};
pub use span::Span;
