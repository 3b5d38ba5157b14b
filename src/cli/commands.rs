//! CLI command definitions

use crate::application::ExportFormat;
use crate::infrastructure::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diarylog")]
#[command(about = "Diary log parser and viewer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entry titles with their indices
    List {
        /// Diary file, or '-' for stdin
        file: PathBuf,
    },

    /// Show a single entry
    Show {
        /// Diary file, or '-' for stdin
        file: PathBuf,

        /// Entry index (out-of-range values show the first entry)
        index: Option<usize>,

        /// Show the entry after INDEX, wrapping around
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the entry before INDEX, wrapping around
        #[arg(long)]
        prev: bool,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Keep blank lines between narrative paragraphs
        #[arg(long)]
        preserve_breaks: bool,
    },

    /// Export every entry as TOML or a standalone HTML page
    Export {
        /// Diary file, or '-' for stdin
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep blank lines between narrative paragraphs
        #[arg(long)]
        preserve_breaks: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
