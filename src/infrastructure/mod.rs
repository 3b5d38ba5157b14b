//! Infrastructure layer - Config files and diary input

pub mod config;
pub mod source;

pub use config::{Config, OutputFormat, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use source::DiarySource;
