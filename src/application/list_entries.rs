//! List entries use case

use crate::domain::DiaryParser;
use crate::error::Result;
use crate::infrastructure::DiarySource;

use super::open_diary::open_diary;

/// Titles of every entry, in source order
pub fn list_entries(source: &DiarySource, parser: DiaryParser) -> Result<Vec<String>> {
    let entries = open_diary(source, parser)?;
    Ok(entries.into_iter().map(|entry| entry.title).collect())
}
