//! Portfolio file loading
//!
//! The portfolio file is YAML:
//!
//! ```yaml
//! owner:
//!   name: Jane Doe
//!   email: jane@example.com
//! relay:
//!   public_key: ...
//!   service_id: ...
//!   template_id: ...
//! categories:
//!   - key: web
//!     title: Web Development Projects
//!     kind: web
//!     images:
//!       - src: images/web/web-1.jpg
//!         github: https://github.com/jane/site
//! ```

use crate::error::CatalogError;
use crate::model::catalog::{Catalog, RawCategory};
use crate::model::Profile;
use crate::services::relay::RelayConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything the viewer shows, loaded once at startup
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub owner: Profile,
    pub relay: Option<RelayConfig>,
    pub catalog: Catalog,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Portfolio {
    /// Portfolio shipped with the binary
    pub fn builtin() -> Self {
        Self {
            owner: Profile::default(),
            relay: None,
            catalog: Catalog::builtin(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    owner: Option<Profile>,
    #[serde(default)]
    relay: Option<RelayConfig>,
    #[serde(default)]
    categories: Vec<RawCategory>,
}

/// Parse a portfolio document
pub fn parse_portfolio(contents: &str) -> Result<Portfolio, CatalogError> {
    let file: PortfolioFile = serde_yaml::from_str(contents)?;
    Ok(Portfolio {
        owner: file.owner.unwrap_or_default(),
        relay: file.relay,
        catalog: Catalog::from_raw(file.categories)?,
    })
}

/// Load and parse a portfolio file from disk
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio, CatalogError> {
    let contents = fs::read_to_string(path)?;
    parse_portfolio(&contents)
}
