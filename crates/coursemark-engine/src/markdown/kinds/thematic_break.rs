/// Horizontal rule. Only the exact three-dash form is recognized.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line.trim_end() == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_marker() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("---  "));
    }

    #[test]
    fn other_dash_runs() {
        assert!(!ThematicBreak::matches("----"));
        assert!(!ThematicBreak::matches(" ---"));
        assert!(!ThematicBreak::matches("- - -"));
    }
}
