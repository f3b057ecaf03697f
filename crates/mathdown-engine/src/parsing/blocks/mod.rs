//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each physical line gets a
//!    [`LineRole`] from its own content only (fence, heading, rule, bullet,
//!    numbered, blank, plain).
//!
//! 2. **Block Assembly** (`builder`): a [`BlockBuilder`] threads an explicit
//!    state value through the line stream and emits [`RawBlock`]s as
//!    paragraphs, lists and fences open and close.
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Every block covers a contiguous, non-overlapping range of line indices
//! - Blocks come out in first-line order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{Line, LineClassifier, LineRole, classify};
pub use types::{RawBlock, RawBlockKind, RawItem};
