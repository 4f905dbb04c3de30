/// Pipe table row. No separator-row validation is done: after the header,
/// every pipe line (including `|---|---|`) is a body row.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Splits a `| a | b |` line into trimmed cells. The line must start and
    /// end with a pipe and have something in between.
    pub fn cells(line: &str) -> Option<Vec<&str>> {
        let trimmed = line.trim();
        let inner = trimmed
            .strip_prefix(Self::PIPE)?
            .strip_suffix(Self::PIPE)?;
        if inner.is_empty() {
            return None;
        }
        Some(inner.split(Self::PIPE).map(str::trim).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_cells() {
        assert_eq!(TableRow::cells("| a | b |"), Some(vec!["a", "b"]));
    }

    #[test]
    fn single_cell() {
        assert_eq!(TableRow::cells("|x|"), Some(vec!["x"]));
    }

    #[test]
    fn separator_row_is_just_cells() {
        assert_eq!(TableRow::cells("|---|:-:|"), Some(vec!["---", ":-:"]));
    }

    #[test]
    fn empty_cells_are_kept() {
        assert_eq!(TableRow::cells("| a || c |"), Some(vec!["a", "", "c"]));
    }

    #[test]
    fn rejects_unterminated_rows() {
        assert_eq!(TableRow::cells("| a | b"), None);
        assert_eq!(TableRow::cells("a | b |"), None);
        assert_eq!(TableRow::cells("||"), None);
        assert_eq!(TableRow::cells("|"), None);
    }
}
