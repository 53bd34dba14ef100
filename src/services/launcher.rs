//! Opening external link targets in the system browser

use anyhow::{Context, Result};
use tracing::info;

/// Open `url` in a new browser window/tab
pub fn open_link(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("Failed to open {}", url))?;
    info!(url, "opened link in browser");
    Ok(())
}
