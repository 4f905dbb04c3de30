//! Message formatting for the student chat panel.
//!
//! Chat messages use a lighter dialect than text blocks: no block structure,
//! newlines become `<br>`, and only code, bold and italic are recognized.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::text::{
    escape_html,
    stash::{Stash, strip_reserved},
};

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid code block regex"));
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid code span regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").expect("valid italic regex"));

/// Formats a chat message as HTML. The whole message is escaped first;
/// code regions are protected from the emphasis passes.
pub fn format_message(text: &str) -> String {
    let source = strip_reserved(text);
    let mut stash = Stash::default();

    let text = CODE_BLOCK.replace_all(&source, |caps: &Captures| {
        stash.put(format!(
            "<pre><code>{}</code></pre>",
            escape_html(caps[1].trim())
        ))
    });
    let text = CODE_SPAN.replace_all(&text, |caps: &Captures| {
        stash.put(format!("<code>{}</code>", escape_html(&caps[1])))
    });

    let text = escape_html(&text).replace('\n', "<br>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");

    stash.restore(&text)
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS class of the message bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "chat-message user-message",
            Sender::Assistant => "chat-message ai-message",
        }
    }
}

/// Renders one chat bubble.
pub fn render_message(text: &str, sender: Sender) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        sender.css_class(),
        format_message(text)
    )
}

/// Placeholder assistant used until a real backend is wired in. It answers
/// every question with the same acknowledgement.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubAssistant;

impl StubAssistant {
    pub const REPLY: &'static str = "Thanks for your question! The assistant is not connected yet, \
         so please ask your teacher about:\n\n**{question}**";

    /// Returns `None` for blank questions, which the chat panel never sends.
    pub fn reply(&self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        Some(Self::REPLY.replace("{question}", question))
    }
}
