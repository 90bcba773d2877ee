//! Indented text rendering of tagged trees.

use std::fmt::Write;

use super::{Node, NodeList};

impl Node {
    /// One line per node: ``Tag start..end `text` status``, children indented.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self, 0).expect("String write never fails");
        out
    }
}

impl NodeList {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for node in self {
            write_node(&mut out, node, 0).expect("String write never fails");
        }
        out
    }
}

fn write_node(w: &mut impl Write, node: &Node, depth: usize) -> std::fmt::Result {
    write!(
        w,
        "{:indent$}{} {}..{} `{}` {}",
        "",
        node.tag,
        node.start,
        node.end(),
        node.text,
        node.status,
        indent = depth * 2
    )?;
    if let Some(name) = &node.name {
        write!(w, " name={name}")?;
    }
    if let Some(number) = node.number {
        write!(w, " number={number}")?;
    }
    writeln!(w)?;

    for child in node.children.iter().flatten() {
        write_node(w, child, depth + 1)?;
    }
    Ok(())
}
