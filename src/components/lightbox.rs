//! Lightbox component
//!
//! Full-screen single image viewer stacked on the project modal. It renders
//! whatever `LightboxView` the App hands it; navigation state lives in
//! `GalleryState`.

use crate::action::Action;
use crate::component::{Component, Point};
use crate::components::layout::{centered_popup, truncate};
use crate::model::{LightboxView, Palette};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CONTROL_WIDTH: u16 = 5;
const CONTROL_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
struct Regions {
    image: Rect,
    close: Rect,
    prev: Option<Rect>,
    next: Option<Rect>,
}

#[derive(Default)]
pub struct LightboxComponent {
    pub palette: Palette,
    view: Option<LightboxView>,
    regions: Regions,
}

impl LightboxComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace what is displayed; `None` hides the lightbox
    pub fn set_view(&mut self, view: Option<LightboxView>) {
        self.view = view;
        self.regions = Regions::default();
    }

    #[cfg(test)]
    pub fn view(&self) -> Option<&LightboxView> {
        self.view.as_ref()
    }

    #[cfg(test)]
    pub fn prev_area(&self) -> Option<Rect> {
        self.regions.prev
    }

    #[cfg(test)]
    pub fn next_area(&self) -> Option<Rect> {
        self.regions.next
    }

    #[cfg(test)]
    pub fn image_area(&self) -> Rect {
        self.regions.image
    }

    #[cfg(test)]
    pub fn close_area(&self) -> Rect {
        self.regions.close
    }

    fn draw_control(&self, frame: &mut Frame, column: Rect, glyph: &str) -> Rect {
        let area = centered_popup(column, CONTROL_WIDTH, CONTROL_HEIGHT);
        let p = self.palette;
        frame.render_widget(
            Paragraph::new(Span::styled(
                glyph.to_string(),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(p.accent)),
            ),
            area,
        );
        area
    }
}

impl Component for LightboxComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseLightbox),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::LightboxPrev),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::LightboxNext),
            _ => None,
        };
        Ok(action)
    }

    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        if self.view.is_none() {
            return Ok(None);
        }
        let r = &self.regions;
        if at.within(r.close) {
            return Ok(Some(Action::CloseLightbox));
        }
        if r.prev.is_some_and(|area| at.within(area)) {
            return Ok(Some(Action::LightboxPrev));
        }
        if r.next.is_some_and(|area| at.within(area)) {
            return Ok(Some(Action::LightboxNext));
        }
        if at.within(r.image) {
            return Ok(None);
        }
        // Backdrop or the wrapper around the image
        Ok(Some(Action::CloseLightbox))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(view) = self.view.clone() else {
            return Ok(());
        };
        let p = self.palette;

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(p.bg)), area);

        let content = Rect::new(
            area.x + 1.min(area.width),
            area.y + 1.min(area.height),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );

        let close = Rect::new(
            content.x + content.width.saturating_sub(4),
            content.y,
            3.min(content.width),
            1.min(content.height),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[x]",
                Style::default().fg(p.error).add_modifier(Modifier::BOLD),
            )),
            close,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(content);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CONTROL_WIDTH + 2),
                Constraint::Min(0),
                Constraint::Length(CONTROL_WIDTH + 2),
            ])
            .split(rows[1]);

        let prev = view
            .show_prev
            .then(|| self.draw_control(frame, columns[0], "◀"));
        let next = view
            .show_next
            .then(|| self.draw_control(frame, columns[2], "▶"));

        let stage = columns[1];
        let image = centered_popup(
            stage,
            stage.width.saturating_mul(4) / 5,
            stage.height.saturating_mul(4) / 5,
        );
        let image_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .style(Style::default().bg(p.surface).fg(p.fg));
        let inner = image_block.inner(image);
        frame.render_widget(image_block, image);

        let width = inner.width as usize;
        let mut lines = vec![Line::from(""); (inner.height / 2).saturating_sub(1) as usize];
        lines.push(Line::from(Span::styled(
            "▣",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            truncate(&view.src, width),
            Style::default().fg(p.muted),
        )));
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                view.label.clone(),
                Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[2],
        );

        self.regions = Regions {
            image,
            close,
            prev,
            next,
        };
        Ok(())
    }
}
