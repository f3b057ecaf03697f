/// A single physical line of the input with its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line index in the input.
    pub index: u32,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Splits the input into physical lines.
///
/// Lines end at `\n` (an optional `\r` before it is dropped). A terminal
/// newline does not produce an extra empty line, and the empty string has no
/// lines at all. Line terminators are not content, so `"hello\n"` renders to
/// the same tree as `"hello"`.
pub fn physical_lines(raw: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    raw.lines().enumerate().map(|(i, text)| LineRef {
        index: u32::try_from(i).unwrap_or(u32::MAX),
        text,
    })
}
