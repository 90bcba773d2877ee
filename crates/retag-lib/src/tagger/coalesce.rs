//! Merging of adjacent literal characters into runs.

use crate::syntax::{Node, NodeList, Tag};

/// Merge adjacent literal nodes into `LiteralRun`s, descending into groups.
///
/// A literal directly followed by a quantifier stays on its own, since the quantifier
/// repeats only that character: `abc*` becomes `ab`, `c`, `*`. Character-class contents
/// are left alone. Running the pass twice changes nothing.
pub(crate) fn coalesce(list: &mut NodeList) {
    let nodes = std::mem::take(&mut list.0);
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();

    while let Some(mut node) = iter.next() {
        if node.tag.is_group()
            && let Some(children) = &mut node.children
        {
            coalesce(children);
        }

        let is_operand = iter.peek().is_some_and(|next| next.tag.is_quantifier());

        if !is_operand
            && node.tag.is_literal()
            && let Some(run) = merged.last_mut().filter(|prev| prev.tag.is_literal())
        {
            run.text.push_str(&node.text);
            run.tag = Tag::LiteralRun;
            run.status = run.status.combine(node.status);
            continue;
        }

        merged.push(node);
    }

    list.0 = merged;
}
