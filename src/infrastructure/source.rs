//! Reading diary text from a file or stdin

use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where diary text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiarySource {
    File(PathBuf),
    Stdin,
}

impl DiarySource {
    /// Interpret a command-line path; `-` means stdin
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            DiarySource::Stdin
        } else {
            DiarySource::File(path.to_path_buf())
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            DiarySource::File(path) => {
                log::debug!("reading diary from {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            DiarySource::Stdin => {
                log::debug!("reading diary from stdin");
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}
