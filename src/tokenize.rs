use crate::chariter::CharIter;
use crate::error::StructuralError;
use crate::error::StructuralError::{EmptyTagName, UnterminatedTag};
use crate::tagchar::{name_len, trim_tag_whitespace, trim_tag_whitespace_end};
use crate::textrange::TextRange;
use crate::token::TagToken;
use crate::token::TagToken::*;

/// Scan the tag starting at the cursor, which must sit on `<`, and advance past its `>`.
///
/// STag ::= '<' Name (S Attributes)? '>'
/// EmptyElemTag ::= '<' Name (S Attributes)? '/>'
/// ETag ::= '</' Name S? '>'
///
/// A slash right before `>` marks the tag self-closing no matter what precedes it,
/// which also yields the `</name/>` shape.
pub(crate) fn scan_tag<'a>(cs: &mut CharIter<'a>) -> Result<TagToken<'a>, StructuralError> {
    let start = cs.pos();

    // tag start has already been identified
    cs.advance_n(1);
    let is_closing = cs.test_byte(b'/');
    if is_closing {
        cs.advance_n(1);
    }

    let body_start = cs.pos();
    let tag_end = cs.find_byte(b'>').ok_or_else(|| UnterminatedTag {
        pos: cs.error_pos_of(start),
    })?;
    cs.advance_n(tag_end + 1 - body_start);

    let range = TextRange::new(start, tag_end + 1);
    let body = cs.slice(TextRange::new(body_start, tag_end));
    let (body, is_self_closing) = match body.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (body, false),
    };

    if is_closing && !is_self_closing {
        let name = trim_tag_whitespace_end(body);
        if name.is_empty() {
            return Err(EmptyTagName { pos: cs.error_pos_of(start) });
        }
        return Ok(Close { name, range });
    }

    let split = name_len(body);
    if split == 0 {
        return Err(EmptyTagName { pos: cs.error_pos_of(start) });
    }
    let name = &body[..split];
    let attributes = trim_tag_whitespace(&body[split..]);

    Ok(match (is_closing, is_self_closing) {
        (true, _) => CloseSelfClosing { name, attributes, range },
        (false, true) => SelfClosing { name, attributes, range },
        (false, false) => Open { name, attributes, range },
    })
}
