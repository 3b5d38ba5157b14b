//! Line cursor with blank-line block segmentation

/// Positional reader over the lines of a diary.
///
/// Lines are produced by splitting on `\n` only, so a trailing newline yields
/// a final empty line. The position only moves through [`LineCursor::take_block`].
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        LineCursor {
            lines: text.split('\n').collect(),
            position: 0,
        }
    }

    /// Current line without advancing. `None` marks end of input.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Zero-based index of the next line to be read
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read lines up to the next blank line or end of input.
    ///
    /// The terminating blank line is consumed but not returned. A blank line
    /// at the current position therefore yields an empty block.
    pub fn take_block(&mut self) -> Vec<&'a str> {
        let mut block = Vec::new();
        while let Some(line) = self.peek() {
            self.position += 1;
            if is_blank(line) {
                break;
            }
            block.push(line);
        }
        block
    }
}

/// A line is blank when it holds nothing but whitespace and byte order marks
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_first_line() {
        let cursor = LineCursor::new("one\ntwo");
        assert_eq!(cursor.peek(), Some("one"));
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_empty_text_is_a_single_empty_line() {
        let mut cursor = LineCursor::new("");
        assert_eq!(cursor.peek(), Some(""));
        assert!(cursor.take_block().is_empty());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_take_block_consumes_terminating_blank() {
        let mut cursor = LineCursor::new("a\nb\n\nc");
        assert_eq!(cursor.take_block(), vec!["a", "b"]);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.peek(), Some("c"));
    }

    #[test]
    fn test_take_block_at_end_of_input_loses_nothing() {
        let mut cursor = LineCursor::new("a\n\nb\nc");
        cursor.take_block();
        assert_eq!(cursor.take_block(), vec!["b", "c"]);
        assert!(cursor.is_at_end());
        assert!(cursor.take_block().is_empty());
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let mut cursor = LineCursor::new("a\n  \t\nb");
        assert_eq!(cursor.take_block(), vec!["a"]);
        assert_eq!(cursor.take_block(), vec!["b"]);
    }

    #[test]
    fn test_byte_order_mark_line_is_blank() {
        assert!(is_blank("\u{feff}"));
        assert!(is_blank(" \u{feff}\t"));
        assert!(!is_blank("\u{feff}Entry: Year 1, day 1"));

        let mut cursor = LineCursor::new("a\n\u{feff}\nb");
        assert_eq!(cursor.take_block(), vec!["a"]);
        assert_eq!(cursor.take_block(), vec!["b"]);
    }

    #[test]
    fn test_consecutive_blanks_yield_empty_blocks() {
        let mut cursor = LineCursor::new("a\n\n\nb");
        assert_eq!(cursor.take_block(), vec!["a"]);
        assert!(cursor.take_block().is_empty());
        assert_eq!(cursor.take_block(), vec!["b"]);
    }

    #[test]
    fn test_trailing_newline_leaves_empty_last_line() {
        let mut cursor = LineCursor::new("a\n");
        assert_eq!(cursor.take_block(), vec!["a"]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_lines_keep_surrounding_whitespace() {
        let mut cursor = LineCursor::new("Stats: \n  HP 10");
        assert_eq!(cursor.take_block(), vec!["Stats: ", "  HP 10"]);
    }
}
