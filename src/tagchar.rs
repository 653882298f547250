pub trait TagByte {
    fn is_tag_whitespace(&self) -> bool;

    fn is_name_terminator(&self) -> bool;
}

impl TagByte for u8 {
    /// S ::= (#x20 | #x9 | #xD | #xA)+
    fn is_tag_whitespace(&self) -> bool {
        matches!(self, b' ' | b'\n' | b'\t' | b'\r')
    }

    /// A tag name runs up to the first whitespace, `/` or `>`.
    fn is_name_terminator(&self) -> bool {
        self.is_tag_whitespace() || matches!(self, b'/' | b'>')
    }
}

/// Length of the tag name at the start of `body`.
///
/// All terminators are ASCII, so the returned index is always a char boundary.
pub fn name_len(body: &str) -> usize {
    body.bytes()
        .position(|b| b.is_name_terminator())
        .unwrap_or(body.len())
}

/// Strip tag whitespace from both ends of `text`.
pub fn trim_tag_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii() && (c as u8).is_tag_whitespace())
}

/// Strip tag whitespace from the end of `text`.
pub fn trim_tag_whitespace_end(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_ascii() && (c as u8).is_tag_whitespace())
}
