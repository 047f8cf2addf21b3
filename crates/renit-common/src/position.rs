//! Source position helpers.
//!
//! Maps byte offsets in a source string to 1-based line and 0-based column
//! numbers. Columns count characters, not bytes.

/// Precomputed line starts for a source string.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Build the index by scanning `source` once for line feeds.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Line (1-based) and column (0-based, in characters) of a byte offset.
    ///
    /// Offsets past the end clamp to the end of the source. Offsets inside a
    /// multi-byte character count the characters that start before them.
    #[must_use]
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.source.as_bytes()[line_start..offset]
            .iter()
            .filter(|&&byte| (byte & 0xC0) != 0x80)
            .count();
        (line + 1, column)
    }
}
