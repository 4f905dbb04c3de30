use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `+` markers, rendered as `<ul>`.
    Unordered,
    /// `N.` markers, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+").expect("valid unordered list regex"));
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").expect("valid ordered list regex"));

pub struct ListMarker;

impl ListMarker {
    /// Returns the list kind and the item text if the line is a list item.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        if let Some(m) = UNORDERED_MARKER.find(line) {
            return Some((ListKind::Unordered, line[m.end()..].trim()));
        }
        ORDERED_MARKER
            .find(line)
            .map(|m| (ListKind::Ordered, line[m.end()..].trim()))
    }
}
