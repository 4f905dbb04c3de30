//! Clean-up of diagram block source before it is handed to the external
//! diagram engine. The engine only understands its current `graph` keyword
//! and chokes on code fences and on inline `%%{...}%%` configuration.

use std::sync::LazyLock;

use regex::Regex;

static OPENING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A```\s*mermaid\s*\n?").expect("valid opening fence regex")
});
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*\z").expect("valid closing fence regex"));
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^%%\{.*?\}%%\s*").expect("valid directive regex")
});
static LEGACY_WITH_DIRECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A(diagram)\s+(LR|RL|TB|BT|TD|DT)").expect("valid legacy keyword regex")
});
static LEADING_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s*\n+").expect("valid blank line regex"));

const LEGACY_KEYWORD: &str = "diagram";
const KEYWORD: &str = "graph";

/// Sanitized diagram source together with a record of what was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource {
    pub text: String,
    pub directives_removed: usize,
    pub legacy_keyword_rewritten: bool,
}

impl DiagramSource {
    pub fn sanitize(raw: &str) -> Self {
        let unfenced = OPENING_FENCE.replace(raw, "");
        let unfenced = CLOSING_FENCE.replace(&unfenced, "");
        let trimmed = unfenced.trim();

        let directives_removed = DIRECTIVE.find_iter(trimmed).count();
        let without_directives = DIRECTIVE.replace_all(trimmed, "");

        // A removed directive can leave blank lines in front of the keyword.
        let body = LEADING_BLANK_LINES.replace(&without_directives, "");
        let (normalized, legacy_keyword_rewritten) = rewrite_legacy_keyword(&body);
        let text = LEADING_BLANK_LINES
            .replace(&normalized, "")
            .trim()
            .to_string();

        if directives_removed > 0 || legacy_keyword_rewritten {
            log::debug!(
                "diagram source sanitized: {directives_removed} directive(s) removed, legacy keyword rewritten: {legacy_keyword_rewritten}"
            );
        }

        Self {
            text,
            directives_removed,
            legacy_keyword_rewritten,
        }
    }
}

/// Returns sanitized diagram source; see [`DiagramSource::sanitize`].
pub fn sanitize_diagram_source(raw: &str) -> String {
    DiagramSource::sanitize(raw).text
}

fn rewrite_legacy_keyword(source: &str) -> (String, bool) {
    if LEGACY_WITH_DIRECTION.is_match(source) {
        let rewritten = LEGACY_WITH_DIRECTION.replace(source, format!("{KEYWORD} $2"));
        return (rewritten.into_owned(), true);
    }

    let keyword_len = LEGACY_KEYWORD.len();
    let starts_with_keyword = source
        .get(..keyword_len)
        .is_some_and(|head| head.eq_ignore_ascii_case(LEGACY_KEYWORD));

    if starts_with_keyword {
        let rest = &source[keyword_len..];
        if rest.starts_with(' ') || rest.starts_with('\n') {
            return (format!("{KEYWORD}{rest}"), true);
        }
    }

    (source.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn strips_fences_and_rewrites_keyword() {
        assert_eq!(
            sanitize_diagram_source("```mermaid\ndiagram LR\n A-->B\n```"),
            "graph LR\n A-->B"
        );
    }

    #[test]
    fn strips_directive_line() {
        assert_eq!(
            sanitize_diagram_source("%%{init: {}}%%\ngraph TD\nA-->B"),
            "graph TD\nA-->B"
        );
    }

    #[test]
    fn strips_multiline_directive() {
        let raw = "%%{init: {\n  \"theme\": \"dark\"\n}}%%\ngraph TD\nA-->B";
        let clean = DiagramSource::sanitize(raw);
        assert_eq!(clean.text, "graph TD\nA-->B");
        assert_eq!(clean.directives_removed, 1);
    }

    #[test]
    fn strips_directives_anywhere_at_line_start() {
        assert_eq!(
            sanitize_diagram_source("graph TD\n%%{config: x}%%\nA-->B"),
            "graph TD\nA-->B"
        );
    }

    #[test]
    fn directive_takes_following_blank_lines_with_it() {
        let clean = DiagramSource::sanitize("graph TD\n%%{x}%%\n\n\nA-->B");
        assert_eq!(clean.text, "graph TD\nA-->B");
        assert_eq!(clean.directives_removed, 1);
    }

    #[test]
    fn directive_not_at_line_start_is_kept() {
        assert_eq!(
            sanitize_diagram_source("graph TD\nA-->B %%{x}%%"),
            "graph TD\nA-->B %%{x}%%"
        );
    }

    #[rstest]
    #[case("diagram LR\nA-->B", "graph LR\nA-->B")]
    #[case("diagram TD\nA-->B", "graph TD\nA-->B")]
    #[case("Diagram bt\nA-->B", "graph bt\nA-->B")]
    #[case("DIAGRAM   DT\nA-->B", "graph DT\nA-->B")]
    #[case("diagram foo\nA-->B", "graph foo\nA-->B")]
    #[case("diagram\nA-->B", "graph\nA-->B")]
    fn legacy_keyword(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_diagram_source(raw), expected);
    }

    #[test]
    fn current_keyword_untouched() {
        let clean = DiagramSource::sanitize("graph LR\nA-->B");
        assert_eq!(clean.text, "graph LR\nA-->B");
        assert!(!clean.legacy_keyword_rewritten);
        assert_eq!(clean.directives_removed, 0);
    }

    #[test]
    fn keyword_prefix_of_longer_word_untouched() {
        assert_eq!(sanitize_diagram_source("diagrams\nA"), "diagrams\nA");
    }

    #[test]
    fn fence_detection_is_case_insensitive() {
        assert_eq!(
            sanitize_diagram_source("```  Mermaid  \ngraph LR\nA-->B\n```  \n"),
            "graph LR\nA-->B"
        );
    }

    #[test]
    fn plain_fence_without_language_is_kept_at_start() {
        assert_eq!(
            sanitize_diagram_source("```\ngraph LR\n```"),
            "```\ngraph LR"
        );
    }

    #[test]
    fn directive_before_legacy_keyword() {
        assert_eq!(
            sanitize_diagram_source("```mermaid\n%%{init: {'theme':'forest'}}%%\n\ndiagram RL\nA-->B\n```"),
            "graph RL\nA-->B"
        );
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(sanitize_diagram_source(""), "");
        assert_eq!(sanitize_diagram_source("  \n\t "), "");
        assert_eq!(sanitize_diagram_source("```mermaid\n```"), "");
    }
}
