use serde::{Deserialize, Serialize};

/// Feature switches for a render call.
///
/// Digest-style surfaces that only want light formatting turn both flags off;
/// `$` then stays literal text and fence lines are read as plain lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Extract `$...$` and `$$...$$` regions as equations.
    pub allow_equations: bool,
    /// Treat ```` ``` ```` lines as code fence delimiters.
    pub allow_code_fences: bool,
}

impl RenderOptions {
    /// Every capability enabled (chat replies, assistant responses).
    pub const fn full() -> Self {
        Self {
            allow_equations: true,
            allow_code_fences: true,
        }
    }

    /// Reduced profile for inbox digest bodies.
    pub const fn digest() -> Self {
        Self {
            allow_equations: false,
            allow_code_fences: false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::full()
    }
}
