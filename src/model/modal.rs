//! Dialog stack for overlays outside the gallery
//!
//! The project modal and lightbox live in `GalleryState`; this stack holds
//! the dialogs that can sit above the home screen (quit, help, contact).

/// A dialog overlay drawn on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Contact form
    Contact,
}

/// A stack of dialogs; only the top one receives input
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a dialog unless it is already on top
    pub fn push(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.contains(modal)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
