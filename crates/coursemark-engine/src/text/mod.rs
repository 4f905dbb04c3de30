//! Small text helpers shared by the markdown renderer, the chat formatter
//! and the content block renderers.

pub(crate) mod stash;
pub mod time;

pub use time::{TimeValue, format_duration, format_time, parse_time_label};

/// Escapes `&`, `<`, `>`, `"` and `'` so the result is safe both as element
/// text and inside a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
