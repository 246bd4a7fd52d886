//! User-facing error types

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a selected report file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a PDF or XLSX file.")]
    UnsupportedFileType { mime: Option<String> },

    #[error("No such file: {}", path.display())]
    NotAFile { path: PathBuf },
}

impl UploadError {
    /// Dialog title for the alert shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            UploadError::UnsupportedFileType { .. } => "Unsupported file",
            UploadError::NotAFile { .. } => "File not found",
        }
    }
}
