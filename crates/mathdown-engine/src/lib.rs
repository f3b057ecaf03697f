//! # mathdown-engine
//!
//! Renders untrusted markdown with embedded `$...$` / `$$...$$` math into a
//! typed document tree. The engine never produces markup: every string in the
//! returned tree is data, and the host inserts each leaf through an escaping
//! text primitive.
//!
//! ```
//! use mathdown_engine::{BlockKind, InlineKind, render};
//!
//! let blocks = render("# Result\nThe area is $\\pi r^2$.");
//! assert_eq!(blocks.len(), 2);
//!
//! let BlockKind::Paragraph { content } = &blocks[1].kind else {
//!     panic!("expected a paragraph");
//! };
//! assert!(matches!(
//!     &content[1].kind,
//!     InlineKind::Equation { transcoded, .. } if transcoded == "π r²"
//! ));
//! ```

pub mod document;
pub mod options;
pub mod parsing;

pub use document::{
    BlockKind, BlockNode, EquationForm, HeadingLevel, InlineKind, InlineRun, LineSpan, ListItem,
    NodeId,
};
pub use options::RenderOptions;
pub use parsing::{render, render_with};
