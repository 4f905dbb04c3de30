use std::sync::LazyLock;

use regex::Regex;

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^</?(h[1-6]|p|ul|ol|li|table|thead|tbody|tr|td|th|blockquote|pre|code|hr)(\s|/|>|$)",
    )
    .expect("valid block tag regex")
});

/// A line that already carries block-level markup, such as the renderer's
/// own output fed back in. These lines pass through unmodified.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const PRE_OPEN: &'static str = "<pre";
    pub const PRE_CLOSE: &'static str = "</pre>";

    pub fn matches(line: &str) -> bool {
        BLOCK_TAG.is_match(line.trim_start())
    }

    /// Whether the line starts a `<pre>` element that continues on later
    /// lines. Everything up to the closing tag is then passed through
    /// verbatim. A `<pre>` further along the line does not count.
    pub fn opens_preformatted(line: &str) -> bool {
        let lower = line.trim_start().to_ascii_lowercase();
        let Some(after) = lower.strip_prefix(Self::PRE_OPEN) else {
            return false;
        };
        let tag_ends = after
            .chars()
            .next()
            .is_none_or(|c| c == '>' || c == '/' || c.is_whitespace());
        tag_ends && !lower.contains(Self::PRE_CLOSE)
    }

    pub fn closes_preformatted(line: &str) -> bool {
        line.to_ascii_lowercase().contains(Self::PRE_CLOSE)
    }
}
