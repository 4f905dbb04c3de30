//! Renderer for the restricted markdown dialect used by text content blocks.
//!
//! Rendering runs in two phases. Each line is first classified on its own
//! ([`classify`]), then a single forward scan groups the classified lines
//! into typed [`LineEvent`]s ([`events`]). The events are folded into HTML
//! ([`html`]), with inline formatting applied to the text of each block
//! ([`inline`]). Fenced code is captured during grouping, so its contents
//! never reach the inline passes.

pub mod classify;
pub mod events;
pub mod html;
pub mod inline;
pub mod kinds;

pub use events::{Block, LineEvent};

use classify::MarkdownLineClassifier;
use events::BlockGrouper;

use crate::text::stash::strip_reserved;

/// Renders markdown to an HTML fragment. Never fails: anything the dialect
/// does not recognize comes out as escaped paragraph text.
pub fn render_markdown(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let source = strip_reserved(markdown);
    html::fold(line_events(&source))
}

/// [`render_markdown`] for optional content; `None` renders as empty.
pub fn render_markdown_opt(markdown: Option<&str>) -> String {
    markdown.map(render_markdown).unwrap_or_default()
}

/// Runs the classification and grouping phases without producing HTML.
pub fn line_events(markdown: &str) -> Vec<LineEvent<'_>> {
    let classifier = MarkdownLineClassifier;
    let mut grouper = BlockGrouper::new();

    for line in markdown.lines() {
        grouper.push(classifier.classify(line));
    }

    grouper.finish()
}
