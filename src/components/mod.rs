//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod contact_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod lightbox;
pub mod notification;
pub mod project_modal;
pub mod quit_dialog;
pub mod splash;

pub use contact_dialog::ContactDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use lightbox::LightboxComponent;
pub use notification::draw_notification;
pub use project_modal::ProjectModal;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
