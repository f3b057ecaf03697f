/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is never re-scanned for bold or
/// italic markers.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
