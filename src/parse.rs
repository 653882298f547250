use tracing::{debug, trace};

use crate::chariter::CharIter;
use crate::config::{BuilderConfig, TrailingText};
use crate::error::StructuralError;
use crate::error::StructuralError::{MismatchedTag, UnclosedElement, UnexpectedClosingTag};
use crate::node::{NodeId, NodeKind, Tree};
use crate::textrange::TextRange;
use crate::token::TagToken;
use crate::tokenize::scan_tag;

/// Builds a [Tree] from SSML-like markup in a single forward scan.
///
/// The builder only holds read-only configuration, so one instance can serve
/// any number of concurrent [build](TagTreeBuilder::build) calls.
#[derive(Debug, Clone, Default)]
pub struct TagTreeBuilder {
    config: BuilderConfig,
}

impl TagTreeBuilder {
    pub fn new(config: BuilderConfig) -> TagTreeBuilder {
        TagTreeBuilder { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Scan `markup` left to right and assemble its tree.
    ///
    /// Text runs become [NodeKind::Text] children of the active element, opening
    /// tags descend into a new element, closing tags ascend after checking the name,
    /// and self-closing tags attach a leaf. On error nothing is returned but the error.
    pub fn build<'a>(&self, markup: &'a str) -> Result<Tree<'a>, StructuralError> {
        debug!(len = markup.len(), "building tag tree");
        let result = self.build_tree(markup);
        match &result {
            Ok(tree) => debug!(nodes = tree.len(), "built tag tree"),
            Err(err) => debug!(error = %err, "tag tree build aborted"),
        }
        result
    }

    fn build_tree<'a>(&self, markup: &'a str) -> Result<Tree<'a>, StructuralError> {
        let mut cs = CharIter::trimmed(markup);
        let mut tree = Tree::new();
        let mut active = NodeId::ROOT;
        let mut depth = 0usize;
        let mut pending_text: Option<TextRange> = None;

        while cs.has_next() {
            if !cs.test_byte(b'<') {
                pending_text = Some(cs.consume_until_byte(b'<'));
                continue;
            }

            if let Some(range) = pending_text.take() {
                tree.append(active, NodeKind::Text(cs.slice(range)), range);
            }

            match scan_tag(&mut cs)? {
                TagToken::Open { name, attributes, range } => {
                    active = tree.append(active, NodeKind::Element { name, attributes }, range);
                    depth += 1;
                    trace!(tag = name, depth, "descend");
                }
                TagToken::SelfClosing { name, attributes, range } |
                TagToken::CloseSelfClosing { name, attributes, range } => {
                    tree.append(active, NodeKind::Element { name, attributes }, range);
                }
                TagToken::Close { name, range } => {
                    active = Self::ascend(&tree, active, name, &cs, range)?;
                    depth -= 1;
                    trace!(tag = name, depth, "ascend");
                }
            }
        }

        if let Some(range) = pending_text {
            match self.config.trailing_text {
                TrailingText::Keep => {
                    tree.append(active, NodeKind::Text(cs.slice(range)), range);
                }
                TrailingText::Drop => trace!(len = range.len(), "dropping trailing text"),
            }
        }

        if active != NodeId::ROOT {
            let open = &tree[active];
            return Err(UnclosedElement {
                name: open.name().unwrap_or_default().to_string(),
                pos: cs.error_pos_of(open.range().start),
            });
        }

        Ok(tree)
    }

    /// Close the active element, returning its parent.
    fn ascend(
        tree: &Tree,
        active: NodeId,
        name: &str,
        cs: &CharIter,
        range: TextRange,
    ) -> Result<NodeId, StructuralError> {
        let pos = cs.error_pos_of(range.start);
        let node = &tree[active];
        match (node.name(), node.parent()) {
            (Some(open), Some(parent)) if open == name => Ok(parent),
            (Some(open), _) => Err(MismatchedTag {
                expected: open.to_string(),
                found: name.to_string(),
                pos,
            }),
            (None, _) => Err(UnexpectedClosingTag {
                name: name.to_string(),
                pos,
            }),
        }
    }
}
