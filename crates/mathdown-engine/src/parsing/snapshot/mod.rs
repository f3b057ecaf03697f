//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`outline`**: Prints a rendered tree as a stable, indented text outline
//!   for `insta` snapshots
//! - **`invariants`**: Runtime checks for renderer correctness (line ranges in
//!   bounds and ordered, ids strictly increasing, code blocks verbatim)
//!
//! Rendering behavior is pinned by snapshot tests over fixture documents
//! rather than by a separate grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
