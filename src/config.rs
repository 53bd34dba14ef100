use crate::model::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a portfolio file
pub const PORTFOLIO_ENV: &str = "FOLIO_TUI_PORTFOLIO";

/// The one persisted user preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Application directory under `$HOME`
pub fn config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".folio-tui"))
}

impl Preferences {
    /// `~/.folio-tui/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("preferences.json"))
    }

    /// Missing or unreadable files fall back to defaults
    pub fn load_from(path: &Path) -> Preferences {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Pick the portfolio file: CLI argument, then environment, then the config dir
pub fn resolve_portfolio_path(cli_arg: Option<String>) -> Option<PathBuf> {
    if let Some(arg) = cli_arg {
        return Some(PathBuf::from(arg));
    }
    if let Ok(path) = env::var(PORTFOLIO_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    config_dir()
        .map(|dir| dir.join("portfolio.yaml"))
        .filter(|p| p.exists())
}
