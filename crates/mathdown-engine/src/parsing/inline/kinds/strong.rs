/// Bold text delimited by `**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}
