use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, HtmlBlock, ListKind, ListMarker, TableRow,
    ThematicBreak,
};

/// What a single line looks like on its own, without reference to the
/// lines around it. Whether a table row really starts a table, or whether a
/// fence opens or closes a block, is decided later by the grouper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Fence(FenceSig<'a>),
    Heading { level: u8, text: &'a str },
    Rule,
    Html,
    Quote(&'a str),
    ListItem { kind: ListKind, text: &'a str },
    TableRow(Vec<&'a str>),
    Plain(&'a str),
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line as written, without its line terminator.
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block grouping phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches(['\r', '\n']);
        LineClass {
            text,
            kind: Self::kind_of(text),
        }
    }

    fn kind_of(text: &str) -> LineKind<'_> {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(sig) = CodeFence::sig(text) {
            return LineKind::Fence(sig);
        }
        if let Some((level, heading)) = Heading::parse(text) {
            return LineKind::Heading {
                level,
                text: heading,
            };
        }
        if ThematicBreak::matches(text) {
            return LineKind::Rule;
        }
        if HtmlBlock::matches(text) {
            return LineKind::Html;
        }
        if let Some(quoted) = BlockQuote::strip_prefix(text) {
            return LineKind::Quote(quoted);
        }
        if let Some((kind, item)) = ListMarker::parse(text) {
            return LineKind::ListItem { kind, text: item };
        }
        if let Some(cells) = TableRow::cells(text) {
            return LineKind::TableRow(cells);
        }
        LineKind::Plain(text.trim())
    }
}
