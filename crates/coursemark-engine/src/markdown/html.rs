use super::{
    events::{Block, LineEvent},
    inline::render_inline,
};
use crate::text::escape_html;

/// Folds a line event sequence into HTML, one output line per block.
pub fn fold<'a>(events: impl IntoIterator<Item = LineEvent<'a>>) -> String {
    let mut blocks: Vec<String> = vec![];
    let mut list = String::new();
    let mut paragraph: Vec<&str> = vec![];

    for event in events {
        match event {
            LineEvent::StartList(kind) => {
                list.clear();
                list.push_str(&format!("<{}>", kind.tag()));
            }
            LineEvent::ListItem(text) => {
                list.push_str(&format!("<li>{}</li>", render_inline(text)));
            }
            LineEvent::EndList(kind) => {
                list.push_str(&format!("</{}>", kind.tag()));
                blocks.push(std::mem::take(&mut list));
            }
            LineEvent::StartParagraph => paragraph.clear(),
            LineEvent::ParagraphLine(text) => paragraph.push(text),
            LineEvent::EndParagraph => {
                blocks.push(format!("<p>{}</p>", render_inline(&paragraph.join(" "))));
                paragraph.clear();
            }
            LineEvent::Block(block) => blocks.push(render_block(block)),
        }
    }

    blocks.join("\n")
}

fn render_block(block: Block<'_>) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", render_inline(text))
        }
        Block::Rule => "<hr>".to_string(),
        Block::Code { lines, .. } => {
            format!("<pre><code>{}</code></pre>", escape_html(&lines.join("\n")))
        }
        Block::Quote(text) => format!("<blockquote>{}</blockquote>", render_inline(text)),
        Block::Table { header, rows } => render_table(&header, &rows),
        Block::Html(lines) => lines.join("\n"),
    }
}

fn render_table(header: &[&str], rows: &[Vec<&str>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for cell in header {
        html.push_str(&format!("<th>{}</th>", render_inline(cell)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", render_inline(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
