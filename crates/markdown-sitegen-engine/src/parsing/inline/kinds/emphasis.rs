/// Asterisk emphasis markers.
///
/// Each is a prefix of the one above it, which is why they must be split
/// longest first.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ITALIC: &'static str = "***";
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
