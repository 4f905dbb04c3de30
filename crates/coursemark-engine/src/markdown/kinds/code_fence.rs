/// What a fence line says about the code block it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig<'a> {
    /// A fence on its own line: opens a block, or closes the open one.
    /// `info` is whatever follows the backticks (usually a language tag).
    Boundary { info: Option<&'a str> },
    /// A whole block on a single line: ```` ```code``` ````. `tail` is any
    /// text after the closing backticks; it is paragraph text, not code.
    SingleLine { code: &'a str, tail: &'a str },
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;

        if let Some(end) = rest.find(Self::BACKTICKS) {
            return Some(FenceSig::SingleLine {
                code: &rest[..end],
                tail: rest[end + Self::BACKTICKS.len()..].trim(),
            });
        }

        let info = rest.trim();
        Some(FenceSig::Boundary {
            info: (!info.is_empty()).then_some(info),
        })
    }
}
