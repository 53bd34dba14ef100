//! Action enum - All possible application actions
//!
//! Components turn key presses and clicks into Actions; the App applies them
//! to state. Nothing mutates state while an event is being translated.

use crate::model::Section;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers (splash typing, toast expiry, delivery polling)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Sections & Home Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next section tab
    NextSection,
    /// Move to the previous section tab
    PrevSection,
    /// Jump to a specific section
    SelectSection(Section),
    /// Select next project card
    NextItem,
    /// Select previous project card
    PrevItem,
    /// Scroll background content up one line
    ScrollUp,
    /// Scroll background content down one line
    ScrollDown,
    /// Toggle light/dark theme
    ToggleTheme,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the project modal for a category key
    OpenProjectModal(String),
    /// Close the project modal
    CloseProjectModal,
    /// Open the lightbox at an image index of the open category
    OpenLightbox(usize),
    /// Close the lightbox, back to the project modal
    CloseLightbox,
    /// Show the next image
    LightboxNext,
    /// Show the previous image
    LightboxPrev,
    /// Open an external link in the browser
    OpenLink(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open the contact form
    OpenContactForm,
    /// Validate and send the contact form
    SubmitContact,
    /// Close the top dialog
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::SelectSection(s) => write!(f, "SelectSection({})", s.name()),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::OpenProjectModal(key) => write!(f, "OpenProjectModal({})", key),
            Action::CloseProjectModal => write!(f, "CloseProjectModal"),
            Action::OpenLightbox(i) => write!(f, "OpenLightbox({})", i),
            Action::CloseLightbox => write!(f, "CloseLightbox"),
            Action::LightboxNext => write!(f, "LightboxNext"),
            Action::LightboxPrev => write!(f, "LightboxPrev"),
            Action::OpenLink(url) => write!(f, "OpenLink({})", url),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenContactForm => write!(f, "OpenContactForm"),
            Action::SubmitContact => write!(f, "SubmitContact"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
