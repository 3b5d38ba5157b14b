//! Domain layer - Diary grammar and data model

pub mod cursor;
pub mod entry;
pub mod parser;
pub mod selection;

pub use cursor::LineCursor;
pub use entry::{BlockLabel, DiaryBlock, DiaryEntry, NarrativeBreaks};
pub use parser::{parse_diary, DiaryParser};
