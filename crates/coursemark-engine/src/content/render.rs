//! Static HTML for content blocks, as shown in the student view.
//!
//! Blocks missing their essential field (a video URL, a code body, diagram
//! source) render to an empty string and are logged, mirroring how the
//! student view skips them.

use crate::diagram::DiagramSource;
use crate::markdown::{inline::render_inline, render_markdown_opt};
use crate::text::{escape_html, format_duration, format_time, parse_time_label};

use super::{
    CodeBlock, ContentBlock, DiagramBlock, Module, QuizBlock, TextBlock, VideoBlock, embed_url,
};

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const UNTITLED: &str = "Untitled";

pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text(b) => render_text(b),
        ContentBlock::Video(b) => render_video(b),
        ContentBlock::Code(b) => render_code(b),
        ContentBlock::Quiz(b) => render_quiz(b),
        ContentBlock::Mermaid(b) => render_diagram(b),
    }
}

fn render_text(block: &TextBlock) -> String {
    format!(
        "<div class=\"text-content\">{}</div>",
        render_markdown_opt(block.md_content.as_deref())
    )
}

fn render_video(block: &VideoBlock) -> String {
    let Some(url) = block.url.as_deref().filter(|u| !u.trim().is_empty()) else {
        log::warn!("video block without a URL skipped");
        return String::new();
    };

    let title = block.title.as_deref().unwrap_or(UNTITLED);
    let mut html = format!(
        "<div class=\"video-content\"><div class=\"video-container\">\
         <iframe src=\"{}\" title=\"Video: {}\" allow=\"{IFRAME_ALLOW}\" allowfullscreen loading=\"lazy\"></iframe>\
         </div>",
        escape_html(&embed_url(url, &block.platform)),
        escape_html(title),
    );

    html.push_str(&format!(
        "<div class=\"video-meta\"><span class=\"video-platform\">{}</span>",
        escape_html(&block.platform.to_string())
    ));
    if let Some(seconds) = block.duration_seconds.filter(|&s| s > 0) {
        html.push_str(&format!(
            "<span class=\"video-duration\">{}</span>",
            format_duration(seconds)
        ));
    }
    html.push_str("</div>");

    if !block.key_moments.is_empty() {
        let mut moments: Vec<(&String, &String)> = block.key_moments.iter().collect();
        moments.sort_by_key(|(time, _)| parse_time_label(time).unwrap_or(u64::MAX));

        html.push_str("<div class=\"key-moments\"><h4>Key moments</h4>");
        for (time, description) in moments {
            html.push_str(&format!(
                "<div class=\"key-moment-item\"><span class=\"key-moment-time\">{}</span>\
                 <span class=\"key-moment-desc\">{}</span></div>",
                escape_html(&format_time(time)),
                escape_html(description)
            ));
        }
        html.push_str("</div>");
    }

    if !block.discussion_questions.is_empty() {
        html.push_str("<div class=\"discussion-questions\"><h4>Discussion questions</h4>");
        for question in &block.discussion_questions {
            html.push_str(&format!(
                "<div class=\"question-item\">{}</div>",
                escape_html(question)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

fn render_code(block: &CodeBlock) -> String {
    let Some(code) = block.code.as_deref().filter(|c| !c.is_empty()) else {
        log::warn!("code block without code skipped");
        return String::new();
    };

    let language = block.language.as_deref().unwrap_or("text");
    let mut html = format!(
        "<div class=\"code-block\"><div class=\"code-header\">\
         <span class=\"language-label\">{}</span></div>\
         <pre class=\"code-content\"><code class=\"language-{}\">{}</code></pre>",
        escape_html(language),
        escape_html(&language.to_lowercase()),
        escape_html(code)
    );
    push_explanation(&mut html, "code-explanation", block.explanation.as_deref());
    html.push_str("</div>");
    html
}

fn render_quiz(block: &QuizBlock) -> String {
    let mut html = String::from("<div class=\"quiz-block\">");
    for (index, (question, answer)) in block.questions.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"quiz-question\">{}. {}</div>\
             <div class=\"quiz-answer hidden-answer\" id=\"answer-{index}\"><strong>Answer:</strong> {}</div>\
             <button class=\"show-answer-btn\" type=\"button\" aria-expanded=\"false\" aria-controls=\"answer-{index}\">Show answer</button>",
            index + 1,
            escape_html(question),
            render_inline(answer)
        ));
    }
    html.push_str("</div>");
    html
}

fn render_diagram(block: &DiagramBlock) -> String {
    let Some(raw) = block.mermaid_code.as_deref() else {
        return String::new();
    };

    let source = DiagramSource::sanitize(raw);
    if source.text.is_empty() {
        log::warn!("diagram block is empty after sanitizing, skipped");
        return String::new();
    }

    let mut html = String::from("<div class=\"mermaid-block\">");
    if let Some(title) = block.title.as_deref() {
        html.push_str(&format!("<h3>{}</h3>", escape_html(title)));
    }
    html.push_str(&format!(
        "<div class=\"mermaid\">{}</div>",
        escape_html(&source.text)
    ));
    push_explanation(&mut html, "mermaid-explanation", block.explanation.as_deref());
    html.push_str("</div>");
    html
}

fn push_explanation(html: &mut String, class: &str, explanation: Option<&str>) {
    if let Some(text) = explanation.filter(|t| !t.trim().is_empty()) {
        html.push_str(&format!(
            "<div class=\"{class}\"><strong>Explanation:</strong> {}</div>",
            render_inline(text)
        ));
    }
}

/// Renders a whole module as a standalone HTML page. Blocks that render to
/// nothing are left out.
pub fn render_module(module: &Module) -> String {
    let title = escape_html(&module.title);
    let mut sections = Vec::with_capacity(module.blocks.len());

    for block in &module.blocks {
        let body = render_block(block);
        if body.is_empty() {
            continue;
        }
        let content_type = block.content_type();
        sections.push(format!(
            "<section class=\"content-block {}-block\">\
             <div class=\"block-label\">{}</div>{body}</section>",
            content_type.as_str(),
            content_type.label()
        ));
    }
    log::debug!(
        "rendered module '{}': {} of {} blocks",
        module.title,
        sections.len(),
        module.blocks.len()
    );

    let description = module
        .description
        .as_deref()
        .map(|d| format!("<p class=\"module-description\">{}</p>\n", render_inline(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main class=\"module\">\n\
         <h1 class=\"module-title\">{title}</h1>\n{description}{}\n</main>\n</body>\n</html>\n",
        sections.join("\n")
    )
}
