//! Top-level diary parsing

use crate::domain::cursor::LineCursor;
use crate::domain::entry::{DiaryEntry, NarrativeBreaks};
use crate::error::Result;

/// Parses a whole diary into entries.
///
/// Holds only options; every call builds its own cursor, so one parser can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiaryParser {
    breaks: NarrativeBreaks,
}

impl DiaryParser {
    pub fn new(breaks: NarrativeBreaks) -> Self {
        DiaryParser { breaks }
    }

    pub fn breaks(&self) -> NarrativeBreaks {
        self.breaks
    }

    /// Parse every entry in source order.
    ///
    /// The first malformed title aborts the parse; no partial result is
    /// returned.
    pub fn parse(&self, text: &str) -> Result<Vec<DiaryEntry>> {
        let mut cursor = LineCursor::new(text);
        let mut entries = Vec::new();

        while !cursor.is_at_end() {
            entries.push(DiaryEntry::parse(&mut cursor, self.breaks)?);
        }

        log::debug!("parsed {} diary entries", entries.len());
        Ok(entries)
    }
}

/// Parse a diary with the default options
pub fn parse_diary(text: &str) -> Result<Vec<DiaryEntry>> {
    DiaryParser::default().parse(text)
}
