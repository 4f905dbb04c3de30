use super::{
    classify::{LineClass, LineKind},
    kinds::{FenceSig, HtmlBlock, ListKind},
};

/// A finished block that stands alone in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading {
        level: u8,
        text: &'a str,
    },
    Rule,
    /// Fenced code. The language tag is kept for inspection but not rendered.
    Code {
        info: Option<&'a str>,
        lines: Vec<&'a str>,
    },
    Quote(&'a str),
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
    },
    /// Lines already carrying block markup, passed through as written.
    Html(Vec<&'a str>),
}

/// One step of the block grouping state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    StartList(ListKind),
    ListItem(&'a str),
    EndList(ListKind),
    StartParagraph,
    ParagraphLine(&'a str),
    EndParagraph,
    Block(Block<'a>),
}

#[derive(Debug)]
struct PendingTable<'a> {
    header_line: &'a str,
    header: Vec<&'a str>,
    rows: Vec<Vec<&'a str>>,
    /// A paragraph was open when the header arrived. It stays open until a
    /// body row confirms the table, since a lone pipe line is paragraph text.
    in_paragraph: bool,
}

#[derive(Debug)]
enum Open<'a> {
    None,
    List(ListKind),
    Paragraph,
    Table(PendingTable<'a>),
    Fence {
        info: Option<&'a str>,
        lines: Vec<&'a str>,
    },
    Preformatted(Vec<&'a str>),
}

/// Folds classified lines into [`LineEvent`]s in a single forward scan.
pub struct BlockGrouper<'a> {
    open: Open<'a>,
    out: Vec<LineEvent<'a>>,
}

impl<'a> BlockGrouper<'a> {
    pub fn new() -> Self {
        Self {
            open: Open::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match &mut self.open {
            Open::Fence { lines, .. } => {
                if matches!(c.kind, LineKind::Fence(_)) {
                    self.close_fence();
                } else {
                    lines.push(c.text);
                }
                return;
            }
            Open::Preformatted(lines) => {
                lines.push(c.text);
                if HtmlBlock::closes_preformatted(c.text) {
                    self.close_preformatted();
                }
                return;
            }
            Open::Table(table) => {
                if let LineKind::TableRow(cells) = c.kind {
                    if table.rows.is_empty() && table.in_paragraph {
                        self.out.push(LineEvent::EndParagraph);
                        table.in_paragraph = false;
                    }
                    table.rows.push(cells);
                    return;
                }
                self.close_table();
            }
            _ => {}
        }

        match c.kind {
            LineKind::Blank => self.close_all(),
            LineKind::Fence(FenceSig::SingleLine { code, tail }) => {
                self.emit_block(Block::Code {
                    info: None,
                    lines: vec![code],
                });
                if !tail.is_empty() {
                    self.push_paragraph_line(tail);
                }
            }
            LineKind::Fence(FenceSig::Boundary { info }) => {
                self.close_all();
                self.open = Open::Fence {
                    info,
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => self.emit_block(Block::Heading { level, text }),
            LineKind::Rule => self.emit_block(Block::Rule),
            LineKind::Quote(text) => self.emit_block(Block::Quote(text)),
            LineKind::Html => {
                self.close_all();
                if HtmlBlock::opens_preformatted(c.text) {
                    self.open = Open::Preformatted(vec![c.text]);
                } else {
                    self.out.push(LineEvent::Block(Block::Html(vec![c.text.trim()])));
                }
            }
            LineKind::ListItem { kind, text } => self.push_list_item(kind, text),
            LineKind::TableRow(cells) => {
                self.close_list();
                let in_paragraph = matches!(self.open, Open::Paragraph);
                self.open = Open::Table(PendingTable {
                    header_line: c.text.trim(),
                    header: cells,
                    rows: vec![],
                    in_paragraph,
                });
            }
            LineKind::Plain(text) => self.push_paragraph_line(text),
        }
    }

    pub fn finish(mut self) -> Vec<LineEvent<'a>> {
        // EOF flush
        match self.open {
            Open::Fence { .. } => self.close_fence(),
            Open::Preformatted(_) => self.close_preformatted(),
            Open::Table(_) => {
                self.close_table();
                self.close_all();
            }
            _ => self.close_all(),
        }
        self.out
    }

    fn emit_block(&mut self, block: Block<'a>) {
        self.close_all();
        self.out.push(LineEvent::Block(block));
    }

    fn push_list_item(&mut self, kind: ListKind, text: &'a str) {
        match self.open {
            Open::List(open_kind) if open_kind == kind => {}
            _ => {
                self.close_all();
                self.out.push(LineEvent::StartList(kind));
                self.open = Open::List(kind);
            }
        }
        self.out.push(LineEvent::ListItem(text));
    }

    fn push_paragraph_line(&mut self, text: &'a str) {
        if !matches!(self.open, Open::Paragraph) {
            self.close_all();
            self.out.push(LineEvent::StartParagraph);
            self.open = Open::Paragraph;
        }
        self.out.push(LineEvent::ParagraphLine(text));
    }

    fn close_list(&mut self) {
        if let Open::List(kind) = self.open {
            self.out.push(LineEvent::EndList(kind));
            self.open = Open::None;
        }
    }

    /// Closes an open list or paragraph. Fences, tables and preformatted
    /// regions have their own close paths.
    fn close_all(&mut self) {
        match self.open {
            Open::List(kind) => self.out.push(LineEvent::EndList(kind)),
            Open::Paragraph => self.out.push(LineEvent::EndParagraph),
            _ => {}
        }
        self.open = Open::None;
    }

    fn close_fence(&mut self) {
        let prev = std::mem::replace(&mut self.open, Open::None);
        if let Open::Fence { info, lines } = prev {
            self.out.push(LineEvent::Block(Block::Code { info, lines }));
        }
    }

    fn close_preformatted(&mut self) {
        let prev = std::mem::replace(&mut self.open, Open::None);
        if let Open::Preformatted(lines) = prev {
            self.out.push(LineEvent::Block(Block::Html(lines)));
        }
    }

    /// Emits a confirmed table, or turns a lone header line back into
    /// paragraph text. Leaves `open` as `Paragraph` in the latter case.
    fn close_table(&mut self) {
        let prev = std::mem::replace(&mut self.open, Open::None);
        let Open::Table(table) = prev else {
            self.open = prev;
            return;
        };

        if table.rows.is_empty() {
            if !table.in_paragraph {
                self.out.push(LineEvent::StartParagraph);
            }
            self.out.push(LineEvent::ParagraphLine(table.header_line));
            self.open = Open::Paragraph;
        } else {
            self.out.push(LineEvent::Block(Block::Table {
                header: table.header,
                rows: table.rows,
            }));
        }
    }
}

impl Default for BlockGrouper<'_> {
    fn default() -> Self {
        Self::new()
    }
}
