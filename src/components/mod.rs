//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alert_dialog;
pub mod charts;
pub mod dashboard;
pub mod help_dialog;
pub mod layout;
pub mod orders_table;
pub mod quit_dialog;
pub mod upload;

pub use alert_dialog::AlertDialog;
pub use dashboard::{draw_dashboard_screen, DashboardComponent};
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use upload::UploadComponent;
