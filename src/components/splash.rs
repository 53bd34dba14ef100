//! Splash screen component
//!
//! Shows the owner's name and types the tagline out one character per tick
//! before handing over to the main screen.

use crate::action::Action;
use crate::component::Component;
use crate::model::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

/// Ticks to hold the finished tagline before advancing
const HOLD_TICKS: usize = 10;

/// Splash screen component
#[derive(Default)]
pub struct SplashComponent {
    pub palette: Palette,
    name: String,
    tagline: String,
    /// Ticks seen so far
    ticks: usize,
}

impl SplashComponent {
    pub fn new(name: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            palette: Palette::default(),
            name: name.into(),
            tagline: tagline.into(),
            ticks: 0,
        }
    }

    /// Portion of the tagline typed so far
    pub fn typed(&self) -> String {
        self.tagline.chars().take(self.ticks).collect()
    }

    /// Check if the tagline is typed out and the hold has elapsed
    pub fn is_complete(&self) -> bool {
        self.ticks >= self.tagline.chars().count() + HOLD_TICKS
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.ticks = 0;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.ticks += 1;
            if self.is_complete() {
                return Ok(Some(Action::SplashComplete));
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let p = self.palette;

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(p.bg)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(5) / 2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                self.name.clone(),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[1],
        );

        let cursor = if self.ticks % 2 == 0 { "▌" } else { " " };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.typed(), Style::default().fg(p.fg)),
                Span::styled(cursor, Style::default().fg(p.accent)),
            ]))
            .alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "press any key",
                Style::default().fg(p.muted),
            ))
            .alignment(Alignment::Center),
            chunks[5],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_types_one_character_per_tick() {
        let mut splash = SplashComponent::new("Ada", "Designer");
        splash.init().unwrap();
        assert_eq!(splash.typed(), "");
        for _ in 0..3 {
            assert_eq!(splash.update(Action::Tick).unwrap(), None);
        }
        assert_eq!(splash.typed(), "Des");
    }

    #[test]
    fn test_completes_after_hold() {
        let mut splash = SplashComponent::new("Ada", "ab");
        let mut done = None;
        for tick in 1..=20 {
            if splash.update(Action::Tick).unwrap() == Some(Action::SplashComplete) {
                done = Some(tick);
                break;
            }
        }
        assert_eq!(done, Some(2 + HOLD_TICKS));
    }

    #[test]
    fn test_any_key_skips_and_q_quits() {
        let mut splash = SplashComponent::new("Ada", "Designer");
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(key('x')).unwrap(), Some(Action::SplashComplete));
        assert_eq!(splash.handle_key_event(key('q')).unwrap(), Some(Action::ForceQuit));
    }
}
