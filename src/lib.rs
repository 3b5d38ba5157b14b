//! diarylog - Diary log parser and viewer
//!
//! Parses a line-oriented diary log into entries made of a title line,
//! labeled data blocks (`Stats:`, `Skills:`, `Mutations:`, `Kills:`) and free
//! narrative text, and renders them for the terminal or as HTML.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{parse_diary, DiaryBlock, DiaryEntry, DiaryParser};
pub use error::DiaryError;
