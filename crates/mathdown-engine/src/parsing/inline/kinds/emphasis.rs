/// Italic text delimited by a single `*`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';

    /// A star counts as an emphasis delimiter only when neither neighbour is
    /// also a star, so `**` is never split into two italic markers.
    pub fn is_lone_star(bytes: &[u8], at: usize) -> bool {
        let star = Some(&Self::STAR);
        bytes.get(at) == star
            && (at == 0 || bytes.get(at - 1) != star)
            && bytes.get(at + 1) != star
    }
}
