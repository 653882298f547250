//! Arena-backed markup tree.
//!
//! Nodes live in a single `Vec` owned by [Tree]; parents hold their children as
//! [NodeId]s in document order and every node keeps a non-owning id of its parent.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::textrange::TextRange;

const INDENT: &str = "                                                                ";

/// Index of a node inside its [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root sentinel is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Root,
    /// A maximal run of characters between tags, verbatim.
    Text(&'a str),
    /// A tag with its raw, unparsed attribute text.
    Element { name: &'a str, attributes: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    kind: NodeKind<'a>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    range: TextRange,
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind<'a> {
        self.kind
    }

    /// Element name, `None` for text and the root.
    pub fn name(&self) -> Option<&'a str> {
        match self.kind {
            NodeKind::Element { name, .. } => Some(name),
            NodeKind::Root | NodeKind::Text(_) => None,
        }
    }

    /// Captured text for a text node, raw attribute text for an element.
    pub fn payload(&self) -> Option<&'a str> {
        match self.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { attributes, .. } => Some(attributes),
            NodeKind::Root => None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Byte range in the untrimmed markup. For elements this covers the opening tag only.
    pub fn range(&self) -> TextRange {
        self.range
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
}

impl Default for Tree<'_> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<'a> Tree<'a> {
    /// A tree holding only the root sentinel.
    pub fn new() -> Tree<'a> {
        Tree {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
                range: TextRange::default(),
            }],
        }
    }

    /// Allocate a node and attach it as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind<'a>, range: TextRange) -> NodeId {
        debug_assert!(!self.nodes[parent.0].is_text(), "text nodes are leaves");
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            range,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<'a>> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// If the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node<'a>> + '_ {
        self[id].children.iter().map(move |&child| &self[child])
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Depth of the deepest node in the tree.
    ///
    /// Parents are always allocated before their children, so one pass in
    /// allocation order sees every parent's depth first.
    pub fn max_depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate().skip(1) {
            if let Some(parent) = node.parent {
                depths[index] = depths[parent.index()] + 1;
            }
        }
        depths.into_iter().max().unwrap_or(0)
    }

    /// Pre-order walk of the subtree below `id`, not including `id` itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_, 'a> {
        let mut stack = self[id].children.clone();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Concatenated text of every text node below `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        if let NodeKind::Text(text) = self[id].kind {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|child| match self[child].kind {
                NodeKind::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn fmt_node(&self, f: &mut Formatter, id: NodeId, indent: usize) -> std::fmt::Result {
        let mut pad = indent * 2;
        while pad > 0 {
            let chunk = pad.min(INDENT.len());
            f.write_str(&INDENT[..chunk])?;
            pad -= chunk;
        }
        match self[id].kind {
            NodeKind::Root => writeln!(f, "Root"),
            NodeKind::Text(text) => writeln!(f, "{:?}", text),
            NodeKind::Element { name, attributes } if attributes.is_empty() => writeln!(f, "<{}>", name),
            NodeKind::Element { name, attributes } => writeln!(f, "<{} {}>", name, attributes),
        }
    }
}

impl<'a> Index<NodeId> for Tree<'a> {
    type Output = Node<'a>;

    fn index(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }
}

/// Indented outline, one node per line.
impl Display for Tree<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // explicit stack, nesting depth is unbounded
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, indent)) = stack.pop() {
            self.fmt_node(f, id, indent)?;
            stack.extend(self[id].children.iter().rev().map(|&child| (child, indent + 1)));
        }
        Ok(())
    }
}

pub struct Descendants<'t, 'a> {
    tree: &'t Tree<'a>,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_, '_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree[id].children.iter().rev());
        Some(id)
    }
}
