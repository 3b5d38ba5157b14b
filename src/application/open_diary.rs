//! Open diary use case

use crate::domain::{DiaryEntry, DiaryParser};
use crate::error::Result;
use crate::infrastructure::DiarySource;

/// Read and parse a whole diary.
pub fn open_diary(source: &DiarySource, parser: DiaryParser) -> Result<Vec<DiaryEntry>> {
    let text = source.read_to_string()?;
    parser.parse(&text)
}
