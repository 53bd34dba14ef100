//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Portfolio file loading
//! - Hosted mail relay for the contact form
//! - Background delivery of contact messages
//! - Opening links in the system browser

pub mod dispatcher;
pub mod launcher;
pub mod portfolio;
pub mod relay;

pub use dispatcher::{DeliveryOutcome, Dispatcher};
pub use launcher::open_link;
pub use portfolio::{load_portfolio, Portfolio};
pub use relay::{EmailJsRelay, MailRelay, UnconfiguredRelay};
