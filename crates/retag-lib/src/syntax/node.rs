//! Positioned, classified spans of a pattern.

use std::ops::{Index, Range};

use serde::Serialize;

use super::{Status, Tag};

/// A tagged span of the pattern.
///
/// `start` is a byte offset into the pattern and `text` is the exact slice the node
/// covers, so `&pattern[node.range()] == node.text()` always holds. Groups and classes
/// own their contents as children; every other node is a leaf, except brace quantifiers
/// which own their numeric bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub(crate) tag: Tag,
    pub(crate) start: usize,
    pub(crate) text: String,
    pub(crate) status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) children: Option<NodeList>,
    /// Group name, set only on named groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    /// Resolved group number, set only on backreferences that resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) number: Option<u32>,
}

impl Node {
    pub fn leaf(tag: Tag, start: usize, text: impl Into<String>, status: Status) -> Self {
        Self {
            tag,
            start,
            text: text.into(),
            status,
            children: None,
            name: None,
            number: None,
        }
    }

    pub fn composite(
        tag: Tag,
        start: usize,
        text: impl Into<String>,
        status: Status,
        children: NodeList,
    ) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(tag, start, text, status)
        }
    }

    pub fn group(
        tag: Tag,
        start: usize,
        text: impl Into<String>,
        status: Status,
        name: Option<String>,
        children: NodeList,
    ) -> Self {
        Self {
            name,
            ..Self::composite(tag, start, text, status, children)
        }
    }

    pub fn backreference(
        start: usize,
        text: impl Into<String>,
        status: Status,
        number: Option<u32>,
    ) -> Self {
        Self {
            number,
            ..Self::leaf(Tag::Backreference, start, text, status)
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte length; always `text().len()`.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn children(&self) -> Option<&NodeList> {
        self.children.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Shift this node and every descendant by `delta` bytes.
    pub fn move_start(&mut self, delta: isize) {
        self.start = self.start.saturating_add_signed(delta);
        if let Some(children) = &mut self.children {
            for child in &mut children.0 {
                child.move_start(delta);
            }
        }
    }

    /// Pre-order traversal of this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Repeat bounds of a quantifier node.
    ///
    /// `None` for other tags and for brace quantifiers missing their lower bound.
    pub fn quantifier(&self) -> Option<Repeat> {
        if self.tag != Tag::Quantifier {
            return None;
        }

        let lazy = self.text.len() > 1 && self.text.ends_with('?');
        let base = if lazy {
            &self.text[..self.text.len() - 1]
        } else {
            self.text.as_str()
        };

        let (low, high) = match base {
            "?" => (0, Some(1)),
            "*" => (0, None),
            "+" => (1, None),
            _ => {
                let mut bounds = self
                    .children
                    .iter()
                    .flat_map(|c| c.iter())
                    .filter(|c| c.tag == Tag::RepeatBound)
                    .map(|c| c.text.parse::<u32>().unwrap_or(u32::MAX));
                let low = bounds.next()?;
                let high = if base.contains(',') {
                    bounds.next()
                } else {
                    Some(low)
                };
                (low, high)
            }
        };

        Some(Repeat { low, high, lazy })
    }

    /// The single code point this node denotes, when it denotes exactly one.
    pub(crate) fn code_point(&self) -> Option<char> {
        if !self.tag.is_single_char() || !self.status.is_ok() {
            return None;
        }

        match self.tag {
            Tag::LiteralChar => self.text.chars().next(),
            Tag::EscapedChar => self.text.chars().nth(1).map(unescape),
            Tag::OctalEscape => radix_char(&self.text[1..], 8),
            Tag::HexEscape | Tag::UnicodeEscape => radix_char(&self.text[2..], 16),
            Tag::ControlChar => {
                let letter = self.text.chars().nth(2)?.to_ascii_uppercase();
                char::from_u32(letter as u32 - '@' as u32)
            }
            _ => None,
        }
    }
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'a' => '\x07',
        'b' => '\x08',
        'v' => '\x0B',
        'f' => '\x0C',
        'e' => '\x1B',
        other => other,
    }
}

fn radix_char(digits: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}

/// Repeat bounds derived from a quantifier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub low: u32,
    /// `None` means unbounded.
    pub high: Option<u32>,
    pub lazy: bool,
}

impl Repeat {
    /// Whether the quantified item can match more than once.
    pub fn multiplies_matches(&self) -> bool {
        self.high.is_none_or(|high| high > 1)
    }
}

/// Insertion-ordered sequence of sibling nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NodeList(pub(crate) Vec<Node>);

impl NodeList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.0.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Node> {
        self.0.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    /// Pre-order traversal over every node of every root.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        self.0.iter().flat_map(Node::walk)
    }

    /// Concatenated text of the roots.
    pub fn text(&self) -> String {
        self.0.iter().map(Node::text).collect()
    }
}

impl Index<usize> for NodeList {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.0[index]
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for NodeList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        if let Some(children) = &node.children {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
