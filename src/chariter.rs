use crate::error::ErrorPos;
use crate::textrange::TextRange;

/// Byte cursor over the trimmed region `pos..end` of the markup.
///
/// Every read is bounds-checked against `end`; running out of input surfaces as
/// `None` and is turned into an error by the caller.
pub struct CharIter<'a> {
    pub(crate) pos: usize,
    pub(crate) end: usize,
    pub(crate) text: &'a str,
}

impl<'a> CharIter<'a> {
    /// Cursor over `text` with leading and trailing whitespace excluded.
    pub fn trimmed(text: &'a str) -> CharIter<'a> {
        let pos = text.len() - text.trim_start().len();
        let end = text.trim_end().len().max(pos);
        CharIter { pos, end, text }
    }

    /// Get the current position as an index in the underlying string slice
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// If the iterator has more elements
    pub fn has_next(&self) -> bool {
        self.pos < self.end
    }

    /// Get the current byte without advancing the iterator
    /// Does NOT check for char boundaries
    pub fn peek_byte(&self) -> Option<u8> {
        if !self.has_next() {
            return None;
        }
        Some(self.text.as_bytes()[self.pos])
    }

    /// Test if the specified byte equals the current byte
    pub fn test_byte(&self, test: u8) -> bool {
        self.peek_byte() == Some(test)
    }

    /// Advance the iterator by n, stopping at the end of the input
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    /// Position of the next occurrence of `byte`, without moving the iterator.
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.text.as_bytes()[self.pos..self.end]
            .iter()
            .position(|&b| b == byte)
            .map(|offset| self.pos + offset)
    }

    /// Advance up to the next occurrence of `byte` (or the end) and get the skipped range.
    pub fn consume_until_byte(&mut self, byte: u8) -> TextRange {
        let start = self.pos;
        self.pos = self.find_byte(byte).unwrap_or(self.end);
        TextRange::new(start, self.pos)
    }

    pub fn slice(&self, range: TextRange) -> &'a str {
        &self.text[range.start..range.end]
    }

    /// Line and column of a byte offset in the whole input, for error reporting
    pub fn error_pos_of(&self, pos: usize) -> ErrorPos {
        let before = &self.text.as_bytes()[..pos.min(self.text.len())];
        let row = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let col = 1 + self.text[line_start..pos.min(self.text.len())].chars().count();
        ErrorPos { row, col }
    }
}
