use std::fmt::{Display, Formatter};

/// 1-based line and column of a byte offset in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorPos {
    pub row: usize,
    pub col: usize,
}

impl Display for ErrorPos {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.row, self.col)
    }
}

/// The tag structure of the markup is invalid or incomplete.
///
/// Either a closing tag does not match the open element (see [is_mismatch](StructuralError::is_mismatch)),
/// or the markup is malformed (see [is_malformed](StructuralError::is_malformed)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("closing tag </{found}> does not match open element <{expected}> at {pos}")]
    MismatchedTag {
        expected: String,
        found: String,
        pos: ErrorPos,
    },

    #[error("unterminated tag at {pos}")]
    UnterminatedTag { pos: ErrorPos },

    #[error("closing tag </{name}> without an open element at {pos}")]
    UnexpectedClosingTag { name: String, pos: ErrorPos },

    #[error("element <{name}> opened at {pos} is never closed")]
    UnclosedElement { name: String, pos: ErrorPos },

    #[error("empty tag name at {pos}")]
    EmptyTagName { pos: ErrorPos },
}

impl StructuralError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, StructuralError::MismatchedTag { .. })
    }

    pub fn is_malformed(&self) -> bool {
        !self.is_mismatch()
    }

    /// The tag name the error points at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            StructuralError::MismatchedTag { found, .. } => Some(found),
            StructuralError::UnexpectedClosingTag { name, .. } |
            StructuralError::UnclosedElement { name, .. } => Some(name),
            StructuralError::UnterminatedTag { .. } |
            StructuralError::EmptyTagName { .. } => None,
        }
    }

    pub fn pos(&self) -> ErrorPos {
        match self {
            StructuralError::MismatchedTag { pos, .. } |
            StructuralError::UnterminatedTag { pos } |
            StructuralError::UnexpectedClosingTag { pos, .. } |
            StructuralError::UnclosedElement { pos, .. } |
            StructuralError::EmptyTagName { pos } => *pos,
        }
    }
}
