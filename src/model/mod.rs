//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` - Static project categories and their images
//! - `GalleryState` - Project modal / lightbox navigation state
//! - `ContactForm` - Contact form input and validation
//! - `ModalStack` - Dialog overlay management

pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod modal;
pub mod notification;
pub mod profile;
pub mod ui;

// Re-export commonly used types
pub use catalog::{Catalog, Category, CategoryKind, LinkKind};
pub use contact::{ContactField, ContactForm, ContactMessage};
pub use gallery::{GalleryLayer, GalleryState, Lightbox, LightboxView};
pub use notification::{Notification, NotificationLevel};
pub use profile::Profile;
pub use ui::{Palette, Section, Theme};
