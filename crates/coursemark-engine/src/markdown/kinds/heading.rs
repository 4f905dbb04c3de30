/// ATX heading, levels one to four.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 4;

    /// Returns the level and the heading text if `line` opens with one to
    /// four `#` followed by a space. Deeper headings are not recognized.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let text = line[level..].strip_prefix(' ')?;
        Some((level as u8, text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_level() {
        assert_eq!(Heading::parse("# One"), Some((1, "One")));
        assert_eq!(Heading::parse("## Two"), Some((2, "Two")));
        assert_eq!(Heading::parse("### Three"), Some((3, "Three")));
        assert_eq!(Heading::parse("#### Four"), Some((4, "Four")));
    }

    #[test]
    fn five_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("##### Five"), None);
    }

    #[test]
    fn requires_space_after_marker() {
        assert_eq!(Heading::parse("#hashtag"), None);
        assert_eq!(Heading::parse("#"), None);
    }

    #[test]
    fn empty_heading_text() {
        assert_eq!(Heading::parse("# "), Some((1, "")));
    }
}
