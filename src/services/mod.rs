//! Services behind the views
//!
//! - Read-only report data access
//! - Cancellable delayed tasks driven by the app tick

pub mod data_source;
pub mod scheduler;

pub use data_source::{DataSource, SampleData};
pub use scheduler::Scheduler;
