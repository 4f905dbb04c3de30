//! Opaque placeholders for finished HTML fragments.
//!
//! Regex passes that emit markup stash their output and leave a placeholder
//! behind, so later passes cannot re-read the emitted tags as source text.
//! Placeholders are built from private-use characters that are stripped from
//! author input up front.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{OPEN}([0-9]+){CLOSE}")).expect("valid placeholder regex")
});

#[derive(Debug, Default)]
pub(crate) struct Stash {
    fragments: Vec<String>,
}

impl Stash {
    /// Stores `html` and returns its placeholder. Placeholders already inside
    /// `html` are resolved first, so restoring is always a single pass.
    pub(crate) fn put(&mut self, html: String) -> String {
        let html = self.restore(&html);
        self.fragments.push(html);
        format!("{OPEN}{}{CLOSE}", self.fragments.len() - 1)
    }

    pub(crate) fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.fragments.get(i))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Removes the placeholder delimiter characters so author text can never
/// forge a placeholder.
pub fn strip_reserved(text: &str) -> Cow<'_, str> {
    if text.contains([OPEN, CLOSE]) {
        text.replace([OPEN, CLOSE], "").into()
    } else {
        text.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_fragments() {
        let mut stash = Stash::default();
        let a = stash.put("<b>a</b>".to_string());
        let b = stash.put("<i>b</i>".to_string());
        assert_eq!(stash.restore(&format!("{a} and {b}")), "<b>a</b> and <i>b</i>");
    }

    #[test]
    fn nested_placeholders_resolve_on_put() {
        let mut stash = Stash::default();
        let inner = stash.put("<code>x</code>".to_string());
        let outer = stash.put(format!("<a>{inner}</a>"));
        assert_eq!(stash.restore(&outer), "<a><code>x</code></a>");
    }

    #[test]
    fn unknown_placeholder_restores_to_nothing() {
        let stash = Stash::default();
        assert_eq!(stash.restore("a\u{E000}7\u{E001}b"), "ab");
    }

    #[test]
    fn reserved_characters_are_stripped() {
        assert_eq!(strip_reserved("a\u{E000}0\u{E001}b"), "a0b");
        assert!(matches!(strip_reserved("plain"), Cow::Borrowed("plain")));
    }
}
