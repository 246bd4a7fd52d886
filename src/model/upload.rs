//! Upload screen data types

use crate::error::UploadError;
use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Progress of the upload screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    FileChosen,
    Analyzing,
    Complete,
}

impl UploadPhase {
    pub fn name(&self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::FileChosen => "file-chosen",
            UploadPhase::Analyzing => "analyzing",
            UploadPhase::Complete => "complete",
        }
    }

    /// Whether the file and report type inputs are locked
    pub fn is_locked(&self) -> bool {
        matches!(self, UploadPhase::Analyzing | UploadPhase::Complete)
    }
}

/// Kind of report being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportType {
    #[default]
    Payment,
    MerchantTax,
}

impl ReportType {
    pub fn all() -> Vec<ReportType> {
        vec![ReportType::Payment, ReportType::MerchantTax]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Payment => "Payment Report",
            ReportType::MerchantTax => "Merchant Tax Report (MTR)",
        }
    }

    pub fn toggled(&self) -> ReportType {
        match self {
            ReportType::Payment => ReportType::MerchantTax,
            ReportType::MerchantTax => ReportType::Payment,
        }
    }
}

/// Accepted report file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Spreadsheet,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Option<FileKind> {
        match mime {
            PDF_MIME => Some(FileKind::Pdf),
            XLSX_MIME => Some(FileKind::Spreadsheet),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Spreadsheet => "XLSX",
        }
    }
}

/// MIME type for a path, derived from its extension
///
/// Only the types this screen cares about are mapped, plus a handful of
/// common neighbours so rejections can be logged with a meaningful type.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => PDF_MIME,
        "xlsx" => XLSX_MIME,
        "xls" => "application/vnd.ms-excel",
        "csv" => "text/csv",
        "txt" => "text/plain",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

/// A validated report file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl ChosenFile {
    /// Validate a selected path
    ///
    /// The type check runs first, so an unsupported file is reported as such
    /// even when it does not exist.
    pub fn validate(path: &Path) -> Result<ChosenFile, UploadError> {
        let mime = mime_for_path(path);
        let kind = mime
            .and_then(FileKind::from_mime)
            .ok_or_else(|| UploadError::UnsupportedFileType {
                mime: mime.map(str::to_string),
            })?;

        if !path.is_file() {
            return Err(UploadError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        Ok(ChosenFile {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// File name shown on the picker button
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("payout-tui-upload-model-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, b"test").unwrap();
        path
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("report.pdf")), Some(PDF_MIME));
        assert_eq!(mime_for_path(Path::new("REPORT.XLSX")), Some(XLSX_MIME));
        assert_eq!(mime_for_path(Path::new("report.csv")), Some("text/csv"));
        assert_eq!(mime_for_path(Path::new("report")), None);
        assert_eq!(mime_for_path(Path::new("report.unknownext")), None);
    }

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime(PDF_MIME), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_mime(XLSX_MIME), Some(FileKind::Spreadsheet));
        assert_eq!(FileKind::from_mime("application/vnd.ms-excel"), None);
    }

    #[test]
    fn test_validate_accepts_pdf_and_xlsx() {
        let pdf = temp_file("accepted.pdf");
        let xlsx = temp_file("accepted.xlsx");

        assert_eq!(ChosenFile::validate(&pdf).unwrap().kind, FileKind::Pdf);
        assert_eq!(
            ChosenFile::validate(&xlsx).unwrap().kind,
            FileKind::Spreadsheet
        );
        assert_eq!(ChosenFile::validate(&pdf).unwrap().file_name(), "accepted.pdf");
    }

    #[test]
    fn test_validate_rejects_other_types() {
        let csv = temp_file("rejected.csv");
        assert_eq!(
            ChosenFile::validate(&csv),
            Err(UploadError::UnsupportedFileType {
                mime: Some("text/csv".to_string())
            })
        );

        let no_ext = temp_file("no_extension");
        assert_eq!(
            ChosenFile::validate(&no_ext),
            Err(UploadError::UnsupportedFileType { mime: None })
        );
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let missing = std::env::temp_dir().join("payout-tui-definitely-missing.pdf");
        assert!(matches!(
            ChosenFile::validate(&missing),
            Err(UploadError::NotAFile { .. })
        ));
    }

    #[test]
    fn test_report_type_default_and_toggle() {
        assert_eq!(ReportType::default(), ReportType::Payment);
        assert_eq!(ReportType::Payment.toggled(), ReportType::MerchantTax);
        assert_eq!(ReportType::MerchantTax.toggled(), ReportType::Payment);
    }

    #[test]
    fn test_phase_lock() {
        assert!(!UploadPhase::Idle.is_locked());
        assert!(!UploadPhase::FileChosen.is_locked());
        assert!(UploadPhase::Analyzing.is_locked());
        assert!(UploadPhase::Complete.is_locked());
    }
}
