//! UI state - presentation enums separate from portfolio data

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Page section shown on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Section> {
        vec![Section::About, Section::Projects, Section::Contact]
    }

    pub fn name(&self) -> &str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Section bound to a number key (1-based)
    pub fn from_digit(c: char) -> Option<Section> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Section::all().get(index).copied()
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Status bar glyph, mirrors the moon/sun toggle
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::Rgb(248, 249, 252),
                surface: Color::Rgb(255, 255, 255),
                fg: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(99, 102, 241),
                highlight_fg: Color::Rgb(255, 255, 255),
                border: Color::Rgb(203, 213, 225),
                success: Color::Rgb(16, 185, 129),
                error: Color::Rgb(239, 68, 68),
                link: Color::Rgb(37, 99, 235),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(15, 23, 42),
                surface: Color::Rgb(30, 41, 59),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                accent: Color::Rgb(129, 140, 248),
                highlight_fg: Color::Rgb(15, 23, 42),
                border: Color::Rgb(71, 85, 105),
                success: Color::Rgb(16, 185, 129),
                error: Color::Rgb(239, 68, 68),
                link: Color::Rgb(96, 165, 250),
            },
        }
    }
}

/// Colors used by every component for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub link: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}
