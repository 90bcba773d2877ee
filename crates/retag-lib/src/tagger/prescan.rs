//! Capture-group discovery ahead of the main pass, so backreferences can be resolved
//! against groups that appear later in the pattern.

use indexmap::IndexSet;

/// Capturing groups of a pattern.
///
/// Unnamed groups are numbered first, left to right; named groups follow in order of
/// first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GroupTable {
    unnamed: u32,
    names: IndexSet<String>,
}

impl GroupTable {
    pub fn scan(pattern: &str) -> Self {
        let mut table = GroupTable::default();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '[' => skip_class(&mut chars),
                '(' if chars.peek() != Some(&'?') => table.unnamed += 1,
                '(' => {
                    chars.next();
                    let close = match chars.peek() {
                        Some('<') => '>',
                        Some('\'') => '\'',
                        Some('#') => {
                            for c in chars.by_ref() {
                                if c == ')' {
                                    break;
                                }
                            }
                            continue;
                        }
                        // A conditional's `(condition)` does not capture.
                        Some('(') => {
                            chars.next();
                            continue;
                        }
                        _ => continue,
                    };
                    chars.next();
                    if matches!(chars.peek(), Some('=' | '!')) {
                        continue;
                    }
                    let mut name = String::new();
                    let mut terminated = false;
                    for c in chars.by_ref() {
                        if c == close {
                            terminated = true;
                            break;
                        }
                        name.push(c);
                    }
                    if terminated && is_group_name(&name) {
                        table.names.insert(name);
                    }
                }
                _ => {}
            }
        }

        table
    }

    /// Total number of capturing groups.
    pub fn count(&self) -> u32 {
        self.unnamed + self.names.len() as u32
    }

    pub fn number_of(&self, name: &str) -> Option<u32> {
        self.names
            .get_index_of(name)
            .map(|index| self.unnamed + index as u32 + 1)
    }

    /// Whether `number` names an existing group.
    pub fn resolves(&self, number: u32) -> bool {
        (1..=self.count()).contains(&number)
    }
}

/// Letter or underscore first, then letters, digits or underscores.
pub(crate) fn is_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn skip_class(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    if chars.peek() == Some(&'^') {
        chars.next();
    }
    if chars.peek() == Some(&']') {
        chars.next();
    }
    let mut depth = 1;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}
