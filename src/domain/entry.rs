//! Diary entry model and grammar

use crate::domain::cursor::LineCursor;
use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix every entry title must start with
pub const ENTRY_PREFIX: &str = "Entry:";

/// Closed set of labels that open a structured block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLabel {
    Stats,
    Skills,
    Mutations,
    Kills,
}

impl BlockLabel {
    pub const ALL: [BlockLabel; 4] = [
        BlockLabel::Stats,
        BlockLabel::Skills,
        BlockLabel::Mutations,
        BlockLabel::Kills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockLabel::Stats => "Stats:",
            BlockLabel::Skills => "Skills:",
            BlockLabel::Mutations => "Mutations:",
            BlockLabel::Kills => "Kills:",
        }
    }

    /// Recognize a label header line. Trailing whitespace is ignored.
    pub fn from_line(line: &str) -> Option<BlockLabel> {
        let line = line.trim_end();
        Self::ALL.into_iter().find(|label| label.as_str() == line)
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Does this line open a new entry?
///
/// Requires the `Entry:` prefix plus both `Year` and `day`, so narrative
/// lines that merely start with `Entry:` stay narrative.
pub fn is_entry_header(line: &str) -> bool {
    line.starts_with(ENTRY_PREFIX) && line.contains("Year") && line.contains("day")
}

pub fn is_block_header(line: &str) -> bool {
    BlockLabel::from_line(line).is_some()
}

/// How narrative blocks are joined when an entry spans several of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeBreaks {
    /// Concatenate blocks, losing the blank lines between them
    #[default]
    Drop,
    /// Keep a single empty line between consecutive blocks
    Preserve,
}

impl FromStr for NarrativeBreaks {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(NarrativeBreaks::Drop),
            "preserve" => Ok(NarrativeBreaks::Preserve),
            _ => Err(format!(
                "Invalid narrative_breaks: '{}'. Valid values: drop, preserve",
                s
            )),
        }
    }
}

impl fmt::Display for NarrativeBreaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrativeBreaks::Drop => f.write_str("drop"),
            NarrativeBreaks::Preserve => f.write_str("preserve"),
        }
    }
}

/// A labeled data block such as `Stats:` followed by its lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryBlock {
    /// Raw header line, including any trailing whitespace
    pub title: String,
    pub lines: Vec<String>,
}

impl DiaryBlock {
    pub fn new(title: String, lines: Vec<String>) -> Self {
        DiaryBlock { title, lines }
    }

    /// Read one block from the cursor, splitting it into title and body.
    ///
    /// The title is not checked against the label vocabulary; callers do that
    /// with [`is_block_header`] first. Returns `None` when the block read is
    /// empty, which only happens on an exhausted cursor or a blank line.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        let block = cursor.take_block();
        let (title, body) = block.split_first()?;
        Some(DiaryBlock::new(
            title.to_string(),
            body.iter().map(|line| line.to_string()).collect(),
        ))
    }

    /// The recognized label of this block, if any
    pub fn label(&self) -> Option<BlockLabel> {
        BlockLabel::from_line(&self.title)
    }
}

/// One diary record: title line, labeled blocks, then narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryEntry {
    pub title: String,
    pub blocks: Vec<DiaryBlock>,
    pub text: Vec<String>,
}

impl DiaryEntry {
    pub fn new(title: String, blocks: Vec<DiaryBlock>, text: Vec<String>) -> Self {
        DiaryEntry {
            title,
            blocks,
            text,
        }
    }

    /// Validate a title block: exactly one line with the `Entry:` prefix
    pub fn parse_title(block: &[&str]) -> Result<String> {
        match block {
            [line] if line.starts_with(ENTRY_PREFIX) => Ok(line.to_string()),
            _ => Err(DiaryError::MalformedTitle {
                line_count: block.len(),
                content: block.join("\n"),
            }),
        }
    }

    /// Parse one entry starting at the cursor position.
    ///
    /// Only a malformed title is an error. Any block after the labeled blocks
    /// that does not open a new entry is folded into the narrative.
    pub fn parse(cursor: &mut LineCursor<'_>, breaks: NarrativeBreaks) -> Result<Self> {
        let start = cursor.position();
        let title = Self::parse_title(&cursor.take_block())?;

        let mut blocks = Vec::new();
        while cursor.peek().is_some_and(is_block_header) {
            match DiaryBlock::parse(cursor) {
                Some(block) => blocks.push(block),
                None => break,
            }
        }

        let mut text: Vec<String> = Vec::new();
        while cursor.peek().is_some_and(|line| !is_entry_header(line)) {
            let block = cursor.take_block();
            if breaks == NarrativeBreaks::Preserve && !block.is_empty() && !text.is_empty() {
                text.push(String::new());
            }
            text.extend(block.into_iter().map(|line| line.to_string()));
        }

        log::trace!(
            "parsed entry '{}' at line {}: {} block(s), {} narrative line(s)",
            title,
            start + 1,
            blocks.len(),
            text.len()
        );

        Ok(DiaryEntry::new(title, blocks, text))
    }

    /// Narrative joined into a single string for rendering
    pub fn narrative(&self) -> String {
        self.text.join("\n")
    }
}
