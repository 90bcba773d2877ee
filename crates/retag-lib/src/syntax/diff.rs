//! Structural comparison of node trees that reports the first mismatch.

use super::{Node, NodeList};

/// Result of comparing an actual tree against an expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    Different(Mismatch),
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Comparison::Equal => None,
            Comparison::Different(m) => Some(m),
        }
    }
}

/// First differing property found by [`Node::diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Location of the node, e.g. `[1].children[0]`. Empty for the compared root.
    pub path: String,
    pub property: &'static str,
    pub actual: String,
    pub expected: String,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(
            f,
            "{}: {} is {}, expected {}",
            path, self.property, self.actual, self.expected
        )
    }
}

impl Node {
    /// Compare with `expected`: tag, status, start, length, text, name, number, then children.
    pub fn diff(&self, expected: &Node) -> Comparison {
        match diff_node(self, expected, String::new()) {
            Some(m) => Comparison::Different(m),
            None => Comparison::Equal,
        }
    }
}

impl NodeList {
    pub fn diff(&self, expected: &NodeList) -> Comparison {
        match diff_list(self, expected, String::new()) {
            Some(m) => Comparison::Different(m),
            None => Comparison::Equal,
        }
    }
}

fn mismatch(
    path: &str,
    property: &'static str,
    actual: impl std::fmt::Debug,
    expected: impl std::fmt::Debug,
) -> Option<Mismatch> {
    Some(Mismatch {
        path: path.to_string(),
        property,
        actual: format!("{actual:?}"),
        expected: format!("{expected:?}"),
    })
}

fn diff_node(actual: &Node, expected: &Node, path: String) -> Option<Mismatch> {
    if actual.tag != expected.tag {
        return mismatch(&path, "tag", actual.tag, expected.tag);
    }
    if actual.status != expected.status {
        return mismatch(&path, "status", actual.status, expected.status);
    }
    if actual.start != expected.start {
        return mismatch(&path, "start", actual.start, expected.start);
    }
    if actual.len() != expected.len() {
        return mismatch(&path, "length", actual.len(), expected.len());
    }
    if actual.text != expected.text {
        return mismatch(&path, "text", &actual.text, &expected.text);
    }
    if actual.name != expected.name {
        return mismatch(&path, "name", &actual.name, &expected.name);
    }
    if actual.number != expected.number {
        return mismatch(&path, "number", actual.number, expected.number);
    }

    match (&actual.children, &expected.children) {
        (None, None) => None,
        (Some(a), Some(e)) => {
            let path = if path.is_empty() {
                "children".to_string()
            } else {
                format!("{path}.children")
            };
            diff_list(a, e, path)
        }
        (a, e) => mismatch(
            &path,
            "children",
            a.as_ref().map(NodeList::len),
            e.as_ref().map(NodeList::len),
        ),
    }
}

fn diff_list(actual: &NodeList, expected: &NodeList, path: String) -> Option<Mismatch> {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if let Some(m) = diff_node(a, e, format!("{path}[{i}]")) {
            return Some(m);
        }
    }

    if actual.len() != expected.len() {
        let path = if path.is_empty() { "<root>".into() } else { path };
        return mismatch(&path, "count", actual.len(), expected.len());
    }
    None
}
