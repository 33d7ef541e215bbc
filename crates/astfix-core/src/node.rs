//! The generic syntax tree shared by every pipeline stage.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// Byte range of a node in the source it was parsed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from byte offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for a zero-length span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node of the generic syntax tree.
///
/// A node is a `(kind, text, children)` triple. The kind is an open-ended
/// label taken from the grammar's tag set (see [`crate::kind`]), `text` is
/// the verbatim source slice covered by the node, and `children` are owned
/// in source order.
///
/// `text` is the only field that may change after construction. It sits
/// behind a [`RefCell`] so a fix pass can rewrite a node while other parts of
/// the same tree are borrowed for whole-tree queries. Node identity is the
/// node's address, which stays stable for the lifetime of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    kind: String,
    text: RefCell<String>,
    #[serde(default, skip_serializing_if = "Span::is_empty")]
    span: Span,
    #[serde(default)]
    children: Vec<AstNode>,
}

impl AstNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: RefCell::new(text.into()),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    /// Sets the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<AstNode>) -> Self {
        self.children = children;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the source span of this node.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The grammar construct this node represents.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns true if this node has the given kind.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Borrows the current source text of this node.
    ///
    /// # Panics
    ///
    /// Panics if the text is being replaced at the same time, which cannot
    /// happen outside of [`AstNode::set_text`].
    #[must_use]
    pub fn text(&self) -> Ref<'_, String> {
        self.text.borrow()
    }

    /// Returns an owned copy of the current text.
    #[must_use]
    pub fn text_owned(&self) -> String {
        self.text.borrow().clone()
    }

    /// Replaces the text of this node, returning the previous text.
    ///
    /// The kind and children are left untouched.
    pub fn set_text(&self, text: impl Into<String>) -> String {
        self.text.replace(text.into())
    }

    /// Source span of this node.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Child nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// Returns the first child with the given kind.
    #[must_use]
    pub fn child(&self, kind: &str) -> Option<&AstNode> {
        self.children.iter().find(|c| c.is(kind))
    }

    /// Returns true if any direct child has the given kind.
    #[must_use]
    pub fn has_child(&self, kind: &str) -> bool {
        self.children.iter().any(|c| c.is(kind))
    }

    /// Returns true if `other` is this very node (not merely an equal one).
    #[must_use]
    pub fn same_node(&self, other: &AstNode) -> bool {
        std::ptr::eq(self, other)
    }

    /// Iterates over this node and all its descendants in pre-order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}

/// Pre-order iterator returned by [`AstNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a AstNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a AstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
