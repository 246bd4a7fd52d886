//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::page::Page;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Upload
    // ─────────────────────────────────────────────────────────────────────────
    /// Add character to the file path input
    UploadInput(char),
    /// Remove last character from the file path input
    UploadBackspace,
    /// Validate the typed path and select it as the report file
    ChooseFile,
    /// Switch between payment and merchant tax report
    ToggleReportType,
    /// Start the analysis of the chosen file
    Analyze,
    /// Analysis finished; switch to the dashboard
    AnalysisComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a specific dashboard page
    Navigate(Page),
    /// Next sidebar page
    NextPage,
    /// Previous sidebar page
    PrevPage,
    /// Open the page linked from the metric card at this index
    OpenMetric(usize),
    /// Collapse or expand the sidebar
    ToggleSidebar,

    // ─────────────────────────────────────────────────────────────────────────
    // Orders Table
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row
    NextItem,
    /// Move to previous row
    PrevItem,
    /// Toggle selection of the focused row
    ToggleRowSelection,
    /// Select all rows, or clear if all are selected
    ToggleSelectAll,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Show a blocking alert
    ShowAlert { title: String, message: String },
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::UploadInput(c) => write!(f, "UploadInput('{}')", c),
            Action::UploadBackspace => write!(f, "UploadBackspace"),
            Action::ChooseFile => write!(f, "ChooseFile"),
            Action::ToggleReportType => write!(f, "ToggleReportType"),
            Action::Analyze => write!(f, "Analyze"),
            Action::AnalysisComplete => write!(f, "AnalysisComplete"),
            Action::Navigate(page) => write!(f, "Navigate({})", page.slug()),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::OpenMetric(idx) => write!(f, "OpenMetric({})", idx),
            Action::ToggleSidebar => write!(f, "ToggleSidebar"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::ToggleRowSelection => write!(f, "ToggleRowSelection"),
            Action::ToggleSelectAll => write!(f, "ToggleSelectAll"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::ShowAlert { title, .. } => write!(f, "ShowAlert({})", title),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Action::Navigate(Page::PreviousMonth).to_string(), "Navigate(previous-month)");
        assert_eq!(Action::SearchInput('x').to_string(), "SearchInput('x')");
        assert_eq!(
            Action::ShowAlert {
                title: "Unsupported file".to_string(),
                message: "Please upload a PDF or XLSX file.".to_string(),
            }
            .to_string(),
            "ShowAlert(Unsupported file)"
        );
    }
}
