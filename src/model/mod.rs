//! Model layer - state and data types
//!
//! - `DashboardState` - dashboard view state (page, selection, search)
//! - `page` - page identifiers and sidebar entries
//! - `sample` - report records shown on the dashboard
//! - `upload` - upload screen phases, report types, file validation
//! - `ModalStack` - modal overlay management

pub mod dashboard;
pub mod modal;
pub mod page;
pub mod sample;
pub mod ui;
pub mod upload;

