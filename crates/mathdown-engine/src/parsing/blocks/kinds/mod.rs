//! # Block Kinds
//!
//! Each block construct owns its delimiter knowledge here. The classifier
//! asks these types whether a trimmed line opens their construct; it never
//! hardcodes `#`, `-` or ```` ``` ```` itself.

pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod rule;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::{BulletMarker, NumberedMarker};
pub use rule::ThematicRule;
