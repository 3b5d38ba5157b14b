//! Error types for diarylog

use thiserror::Error;

/// Main error type for diarylog
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error(
        "Malformed entry title: expected one line starting with 'Entry:', got {line_count} line(s): {content}"
    )]
    MalformedTitle { line_count: usize, content: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::MalformedTitle { .. } => 2,
            DiaryError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::MalformedTitle { line_count, content } => {
                let found = if *line_count == 0 {
                    "an empty block".to_string()
                } else {
                    format!("{} line(s):\n{}", line_count, content)
                };
                format!(
                    "Malformed entry title, found {}\n\n\
                    Suggestions:\n\
                    • Every entry must open with a single line such as 'Entry: Year 1, day 3'\n\
                    • Separate the title line from what follows with a blank line\n\
                    • Remove blank lines at the very start of the diary",
                    found
                )
            }
            DiaryError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: narrative_breaks, format\n\
                        Example: diarylog config narrative_breaks preserve",
                        msg
                    )
                } else if msg.contains("Invalid narrative_breaks") {
                    format!("{}\n\nValid values: drop, preserve", msg)
                } else if msg.contains("Invalid format") {
                    format!("{}\n\nValid values: text, html", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
