//! Inline formatting: code spans, images, links, bold and italic.
//!
//! Code spans, images and links are swapped for opaque placeholders before
//! the emphasis passes run, so emphasis can never match inside code or inside
//! an emitted attribute. Placeholders are restored at the end.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::text::{escape_html, stash::Stash};

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code span regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid image regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+)__").expect("valid bold regex"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid italic regex"));
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_]+)_").expect("valid italic regex"));

/// Renders one run of inline text to HTML. Literal text is escaped.
pub fn render_inline(text: &str) -> String {
    let mut stash = Stash::default();

    let text = CODE_SPAN.replace_all(text, |caps: &Captures| {
        stash.put(format!("<code>{}</code>", escape_html(&caps[1])))
    });

    let text = escape_html(&text);

    let text = IMAGE.replace_all(&text, |caps: &Captures| {
        stash.put(format!("<img src=\"{}\" alt=\"{}\">", &caps[2], &caps[1]))
    });

    let text = LINK.replace_all(&text, |caps: &Captures| {
        stash.put(format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            &caps[2],
            emphasis(&caps[1])
        ))
    });

    stash.restore(&emphasis(&text))
}

/// Bold before italic, so `**x**` is never half-eaten by the single-star rule.
fn emphasis(text: &str) -> String {
    let text = BOLD_STARS.replace_all(text, "<strong>$1</strong>");
    let text = BOLD_UNDERSCORES.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_STAR.replace_all(&text, "<em>$1</em>");
    ITALIC_UNDERSCORE
        .replace_all(&text, "<em>$1</em>")
        .into_owned()
}
