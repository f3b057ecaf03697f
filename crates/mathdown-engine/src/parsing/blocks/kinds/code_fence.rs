/// Triple-backtick code fence.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the trimmed line is a fence delimiter, returns its info string.
    ///
    /// The info string is whatever follows the run of backticks, trimmed; it is
    /// empty for a bare fence.
    pub fn sig(trimmed: &str) -> Option<&str> {
        if !trimmed.starts_with(Self::BACKTICKS) {
            return None;
        }
        Some(trimmed.trim_start_matches('`').trim())
    }
}
