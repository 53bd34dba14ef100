//! Contact form dialog component
//!
//! Collects name, email, an optional subject and a message. Submitting hands
//! the form to the App, which validates it and passes it to the dispatcher.

use crate::action::Action;
use crate::component::{Component, Point};
use crate::components::layout::centered_popup;
use crate::model::{ContactField, ContactForm, Palette};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MESSAGE_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Default)]
struct Regions {
    fields: Vec<(Rect, ContactField)>,
    send: Rect,
    cancel: Rect,
}

/// Contact form dialog
#[derive(Default)]
pub struct ContactDialog {
    pub palette: Palette,
    pub form: ContactForm,
    /// A delivery is in flight; input is frozen until it reports
    pub sending: bool,
    /// Shown as the recipient line
    pub recipient: String,
    regions: Regions,
}

impl ContactDialog {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn field_area(&self, field: ContactField) -> Option<Rect> {
        self.regions
            .fields
            .iter()
            .find(|(_, f)| *f == field)
            .map(|(area, _)| *area)
    }

    #[cfg(test)]
    pub fn send_area(&self) -> Rect {
        self.regions.send
    }

    #[cfg(test)]
    pub fn cancel_area(&self) -> Rect {
        self.regions.cancel
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: ContactField) {
        let p = self.palette;
        let focused = self.form.focus == field;
        let mut value = self.form.value(field).to_string();
        if focused && !self.sending {
            value.push('▏');
        }

        let title = format!(" {} ", field.label());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(if focused { p.accent } else { p.border }));

        let paragraph = Paragraph::new(value)
            .style(Style::default().fg(p.fg))
            .block(block);

        // Long messages keep the cursor line visible
        let paragraph = if field == ContactField::Message {
            let inner_width = area.width.saturating_sub(2).max(1) as usize;
            let rows: usize = self
                .form
                .message
                .split('\n')
                .map(|l| l.chars().count() / inner_width + 1)
                .sum();
            let visible = area.height.saturating_sub(2) as usize;
            let scroll = rows.saturating_sub(visible) as u16;
            paragraph.wrap(Wrap { trim: false }).scroll((scroll, 0))
        } else {
            paragraph
        };

        frame.render_widget(paragraph, area);
    }
}

impl Component for ContactDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Esc {
            return Ok(Some(Action::CloseModal));
        }
        if self.sending {
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SubmitContact)
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                None
            }
            KeyCode::Enter if self.form.focus == ContactField::Message => {
                self.form.input('\n');
                None
            }
            KeyCode::Enter => {
                self.form.focus_next();
                None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                None
            }
            KeyCode::Char(c) => {
                self.form.input(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        if at.within(self.regions.cancel) {
            return Ok(Some(Action::CloseModal));
        }
        if self.sending {
            return Ok(None);
        }
        if at.within(self.regions.send) {
            return Ok(Some(Action::SubmitContact));
        }
        if let Some(&(_, field)) = self.regions.fields.iter().find(|(area, _)| at.within(*area)) {
            self.form.focus = field;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let p = self.palette;
        let popup = centered_popup(area, 60, 9 + 3 * 3 + MESSAGE_HEIGHT);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .title(" Send a message ")
            .title_style(Style::default().fg(p.accent).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(p.surface).fg(p.fg));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let bottom = inner.y + inner.height;
        let row = |y: u16, height: u16| {
            let y = y.min(bottom);
            Rect::new(inner.x, y, inner.width, height.min(bottom - y))
        };

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("To: ", Style::default().fg(p.muted)),
                Span::styled(self.recipient.clone(), Style::default().fg(p.link)),
            ])),
            row(inner.y, 1),
        );

        let mut y = inner.y + 2;
        let mut fields = Vec::new();
        for field in ContactField::all() {
            let height = if field == ContactField::Message {
                MESSAGE_HEIGHT
            } else {
                3
            };
            let area = row(y, height);
            self.draw_field(frame, area, field);
            fields.push((area, field));
            y += height;
        }

        let send_caption = if self.sending { "[ Sending... ]" } else { "[ Send ]" };
        let cancel_caption = "[ Cancel ]";
        let buttons_y = (y + 1).min(bottom.saturating_sub(1));
        let send = Rect::new(inner.x, buttons_y, send_caption.len() as u16, 1);
        let cancel = Rect::new(
            send.x + send.width + 2,
            buttons_y,
            cancel_caption.len() as u16,
            1,
        );
        let send_style = if self.sending {
            Style::default().fg(p.muted)
        } else {
            Style::default().fg(p.success).add_modifier(Modifier::BOLD)
        };

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", Style::default().fg(p.accent)),
                Span::raw(" next  "),
                Span::styled("Ctrl+S", Style::default().fg(p.accent)),
                Span::raw(" send  "),
                Span::styled("Esc", Style::default().fg(p.accent)),
                Span::raw(" close"),
            ]))
            .alignment(Alignment::Right)
            .style(Style::default().fg(p.muted)),
            row(buttons_y, 1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(send_caption, send_style)),
            send.intersection(inner),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                cancel_caption,
                Style::default().fg(p.error).add_modifier(Modifier::BOLD),
            )),
            cancel.intersection(inner),
        );

        self.regions = Regions {
            fields,
            send: send.intersection(inner),
            cancel: cancel.intersection(inner),
        };
        Ok(())
    }
}
