//! Modal stack for managing overlays
//!
//! Overlays (alerts, quit confirmation, help) live on an enum-based stack
//! instead of one boolean flag per dialog.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Blocking alert that must be dismissed before input resumes
    Alert { title: String, message: String },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
