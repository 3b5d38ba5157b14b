//! CLI layer - Command-line interface

pub mod commands;
pub mod html;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_entry, format_entry_list};
