/// A byte cursor over one piece of block text.
///
/// Positions are byte offsets into `s`. The parser only ever stops on ASCII
/// delimiter bytes, so every position it records is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The whole input as bytes, independent of the cursor borrow.
    pub fn bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    /// The byte at an arbitrary offset, `None` past the end.
    pub fn byte_at(&self, at: usize) -> Option<u8> {
        self.s.as_bytes().get(at).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to an absolute offset.
    pub fn jump_to(&mut self, at: usize) {
        self.i = at;
    }

    /// Offset of the next `\n` at or after the cursor, or the end of input.
    pub fn line_end(&self) -> usize {
        self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.s.len(), |off| self.i + off)
    }
}
