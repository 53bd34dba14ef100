//! Help dialog component
//!
//! Lists the keyboard shortcuts of every screen and overlay.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub palette: Palette,
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let p = self.palette;
        let dialog_area = centered_popup(area, 64, area.height.saturating_sub(4));
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(&p);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(p.accent).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(p.accent))
                    .style(Style::default().bg(p.surface)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(p: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let header = Style::default().fg(p.accent).add_modifier(Modifier::BOLD);
    let rule = Style::default().fg(p.border);
    let key_style = Style::default().fg(p.link).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(p.fg);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), header)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            rule,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), key_style),
            Span::styled(description.to_string(), text),
        ]));
    };

    add_section(&mut lines, "Sections");
    add_shortcut(&mut lines, "Tab", "Next section (About/Projects/Contact)");
    add_shortcut(&mut lines, "Shift+Tab", "Previous section");
    add_shortcut(&mut lines, "1 2 3", "Jump to a section");
    add_shortcut(&mut lines, "j / ↓", "Next project, or scroll down");
    add_shortcut(&mut lines, "k / ↑", "Previous project, or scroll up");
    add_shortcut(&mut lines, "Enter", "Open the selected project");

    add_section(&mut lines, "Project Gallery");
    add_shortcut(&mut lines, "←↑↓→ hjkl", "Move between images");
    add_shortcut(&mut lines, "Enter", "View image full size");
    add_shortcut(&mut lines, "b", "Open on Behance (UI/UX projects)");
    add_shortcut(&mut lines, "g", "Open GitHub repository (web projects)");
    add_shortcut(&mut lines, "d", "Open live demo (web projects)");
    add_shortcut(&mut lines, "Esc / q", "Close the gallery");

    add_section(&mut lines, "Image Viewer");
    add_shortcut(&mut lines, "← / h", "Previous image");
    add_shortcut(&mut lines, "→ / l", "Next image");
    add_shortcut(&mut lines, "Esc", "Back to the gallery");

    add_section(&mut lines, "Contact Form");
    add_shortcut(&mut lines, "Tab", "Next field");
    add_shortcut(&mut lines, "Enter", "New line in message, else next field");
    add_shortcut(&mut lines, "Ctrl+s", "Send message");
    add_shortcut(&mut lines, "Esc", "Close form");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "c", "Open contact form");
    add_shortcut(&mut lines, "t", "Toggle light/dark theme");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Mouse", "Click tabs, cards, tiles and buttons");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(p.muted),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(dialog.handle_key_event(key(code)).unwrap(), Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_never_goes_negative() {
        let mut dialog = HelpDialog::default();
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.scroll_offset, 0);
        dialog.handle_key_event(key(KeyCode::PageDown)).unwrap();
        assert_eq!(dialog.scroll_offset, 10);
    }

    #[test]
    fn test_help_lists_gallery_links() {
        let text: String = build_help_content(&Palette::default())
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Open on Behance"));
        assert!(text.contains("Open live demo"));
    }
}
