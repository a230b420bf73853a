/// Pipe table syntax.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A header row needs at least two pipes.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.matches(Self::PIPE).count() >= 2
    }

    /// A separator row holds only pipes, dashes, colons and spaces, with at
    /// least one pipe and one dash.
    pub fn is_separator(trimmed: &str) -> bool {
        trimmed.contains(Self::PIPE)
            && trimmed.contains('-')
            && trimmed
                .chars()
                .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
    }

    /// Splits a row into trimmed cells, dropping the empty cells produced by
    /// leading and trailing pipes.
    pub fn cells(row: &str) -> Vec<&str> {
        let row = row.trim();
        let row = row.strip_prefix(Self::PIPE).unwrap_or(row);
        let row = row.strip_suffix(Self::PIPE).unwrap_or(row);
        row.split(Self::PIPE).map(str::trim).collect()
    }
}
