//! Abstract Syntax Tree definitions for Cucumber Expressions
//!
//! The tree is deliberately uniform: every node has a [`NodeKind`], a [`Span`], and either literal text (for
//! [`NodeKind::Text`]) or an ordered list of children (for every other kind). Downstream compilers walk it to build
//! a matcher; diagnostics use the spans to point back into the source.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Source location span.
///
/// Offsets count Unicode scalar values (`char`s), not bytes, so that positions line up with what a user sees in an
/// expression such as `I have {int} cucumber(s) in my belly/stomach`. Use [`Span::to_byte_range`] when slicing or
/// handing the span to byte-oriented tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is after end {end}");
        Self { start, end }
    }

    /// Empty span at `offset`; used for the virtual start/end-of-line tokens.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert the character offsets into a byte range of `source`.
    ///
    /// Offsets past the end of `source` clamp to `source.len()`.
    pub fn to_byte_range(&self, source: &str) -> Range<usize> {
        let byte_at = |offset: usize| {
            source
                .char_indices()
                .nth(offset)
                .map_or(source.len(), |(index, _)| index)
        };
        byte_at(self.start)..byte_at(self.end)
    }

    /// Return the literal source text covered by this span.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.to_byte_range(source)]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// The root: everything between start-of-line and end-of-line.
    #[serde(rename = "EXPRESSION_NODE")]
    Expression,
    /// `( ... )`
    #[serde(rename = "OPTIONAL_NODE")]
    Optional,
    /// `{ ... }`
    #[serde(rename = "PARAMETER_NODE")]
    Parameter,
    /// `a/b/c` between whitespace boundaries.
    #[serde(rename = "ALTERNATION_NODE")]
    Alternation,
    /// One branch of an alternation.
    #[serde(rename = "ALTERNATIVE_NODE")]
    Alternative,
    /// Literal text, including whitespace and unmatched bracket characters.
    #[serde(rename = "TEXT_NODE")]
    Text,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Expression => "Expression",
            NodeKind::Optional => "Optional",
            NodeKind::Parameter => "Parameter",
            NodeKind::Alternation => "Alternation",
            NodeKind::Alternative => "Alternative",
            NodeKind::Text => "Text",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the expression tree.
///
/// ## Notes
/// - Nodes are immutable once built. The only constructors are [`Node::leaf`] and [`Node::branch`], which keep the
///   text-xor-children shape intact.
/// - Serializes as `{"type": "TEXT_NODE", "start": 0, "end": 5, "token": "three"}` for leaves and
///   `{"type": ..., "start": ..., "end": ..., "nodes": [...]}` for branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(flatten)]
    span: Span,
    #[serde(rename = "token", skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(rename = "nodes", skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Construct a literal node carrying `text` and no children.
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Construct a composite node owning `children`.
    pub fn branch(kind: NodeKind, span: Span, children: Vec<Node>) -> Self {
        Self {
            kind,
            span,
            text: String::new(),
            children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Literal text of a leaf; empty for composite nodes.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Literal text of the whole subtree.
    ///
    /// Leaves return their own (unescaped) text; composite nodes concatenate their children. Delimiters are not
    /// part of the result, so `(s)` yields `s`.
    pub fn joined_text(&self) -> String {
        if self.children.is_empty() {
            return self.text.clone();
        }
        self.children.iter().map(Node::joined_text).collect()
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        // "a(b)"
        Node::branch(
            NodeKind::Expression,
            Span::new(0, 4),
            vec![
                Node::leaf(NodeKind::Text, Span::new(0, 1), "a"),
                Node::branch(
                    NodeKind::Optional,
                    Span::new(1, 4),
                    vec![Node::leaf(NodeKind::Text, Span::new(2, 3), "b")],
                ),
            ],
        )
    }

    #[test]
    fn test_span_byte_range_counts_chars() {
        let source = "café {int}";
        let span = Span::new(5, 10);
        assert_eq!(span.to_byte_range(source), 6..11);
        assert_eq!(span.slice(source), "{int}");
    }

    #[test]
    fn test_span_slice_clamps_past_end() {
        assert_eq!(Span::new(2, 9).slice("abc"), "c");
        assert_eq!(Span::point(3).slice("abc"), "");
    }

    #[test]
    fn test_span_contains_and_merge() {
        let outer = Span::new(2, 8);
        assert!(outer.contains(Span::new(2, 8)));
        assert!(outer.contains(Span::point(5)));
        assert!(!outer.contains(Span::new(1, 3)));
        assert_eq!(Span::new(4, 6).merge(Span::new(1, 2)), Span::new(1, 6));
    }

    #[test]
    fn test_joined_text_skips_delimiters() {
        assert_eq!(sample().joined_text(), "ab");
    }

    #[test]
    fn test_descendants_is_pre_order() {
        let node = sample();
        let kinds: Vec<NodeKind> = node.descendants().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Expression, NodeKind::Text, NodeKind::Optional, NodeKind::Text]
        );
    }

    #[test]
    fn test_branch_has_no_text() {
        let node = sample();
        assert!(node.text().is_empty());
        assert!(!node.is_leaf());
        assert!(node.children()[0].is_leaf());
    }

    #[test]
    fn test_serialized_shape() {
        let empty = Node::branch(NodeKind::Parameter, Span::new(0, 2), Vec::new());
        insta::assert_snapshot!(
            serde_json::to_string(&empty).unwrap(),
            @r#"{"type":"PARAMETER_NODE","start":0,"end":2}"#
        );
        insta::assert_snapshot!(
            serde_json::to_string(&sample()).unwrap(),
            @r#"{"type":"EXPRESSION_NODE","start":0,"end":4,"nodes":[{"type":"TEXT_NODE","start":0,"end":1,"token":"a"},{"type":"OPTIONAL_NODE","start":1,"end":4,"nodes":[{"type":"TEXT_NODE","start":2,"end":3,"token":"b"}]}]}"#
        );
    }
}
