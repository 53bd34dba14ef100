//! Typed errors for the portfolio domain
//!
//! Application plumbing uses `anyhow`; these enums cover the places where
//! callers need to react to a specific failure (status bar text, toasts).

use thiserror::Error;

/// Failure while loading or validating the portfolio catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read portfolio file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse portfolio file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate category key '{0}'")]
    DuplicateKey(String),

    #[error("category key must not be empty (title: '{0}')")]
    EmptyKey(String),
}

/// Contact form validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Failure reported by the hosted mail relay
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Email service not configured. Add a relay section to your portfolio file.")]
    NotConfigured,

    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}
