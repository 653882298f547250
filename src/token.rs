use crate::textrange::TextRange;

/// A single scanned tag. `range` spans from `<` through `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToken<'a> {
    /// `<name attrs>`
    Open { name: &'a str, attributes: &'a str, range: TextRange },
    /// `<name attrs/>`
    SelfClosing { name: &'a str, attributes: &'a str, range: TextRange },
    /// `</name>`
    Close { name: &'a str, range: TextRange },
    /// `</name attrs/>`, attached as a leaf without touching the open element
    CloseSelfClosing { name: &'a str, attributes: &'a str, range: TextRange },
}
