//! Top-level screen selection

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Report upload and simulated analysis
    #[default]
    Upload,
    /// Metrics dashboard
    Dashboard,
}

impl AppMode {
    pub fn name(&self) -> &'static str {
        match self {
            AppMode::Upload => "upload",
            AppMode::Dashboard => "dashboard",
        }
    }
}
