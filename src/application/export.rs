//! Export use case
//!
//! Writes every entry of a diary either as TOML (an `[[entry]]` array of
//! tables) or as a standalone HTML page.

use crate::cli::html::render_page;
use crate::domain::{DiaryEntry, DiaryParser};
use crate::error::Result;
use crate::infrastructure::DiarySource;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use super::open_diary::open_diary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Toml,
    Html,
}

/// Options for export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,

    /// Output file path (None = return the content for stdout)
    pub output: Option<PathBuf>,
}

/// Result of an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub content: String,
    pub entries: usize,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    entry: &'a [DiaryEntry],
}

/// Service for exporting a parsed diary
pub struct ExportService {
    parser: DiaryParser,
}

impl ExportService {
    pub fn new(parser: DiaryParser) -> Self {
        ExportService { parser }
    }

    /// Parse the diary, render it, and write it out when an output path is set
    pub fn execute(&self, source: &DiarySource, options: &ExportOptions) -> Result<Export> {
        let entries = open_diary(source, self.parser)?;
        let content = Self::render(&entries, options.format)?;

        if let Some(path) = &options.output {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &content)?;
            log::debug!("wrote {} entries to {}", entries.len(), path.display());
        }

        Ok(Export {
            content,
            entries: entries.len(),
        })
    }

    pub fn render(entries: &[DiaryEntry], format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Toml => Ok(toml::to_string_pretty(&ExportDocument { entry: entries })?),
            ExportFormat::Html => Ok(render_page(entries)),
        }
    }
}
