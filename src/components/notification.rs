//! Toast rendering for the current notification

use crate::model::{Notification, NotificationLevel, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: u16 = 48;

/// Area of a toast in the top-right corner of `area`
pub fn toast_area(area: Rect, notification: &Notification) -> Rect {
    let max_width = MAX_WIDTH.min(area.width);
    let text_width = notification.message.width() as u16 + 4;
    let width = text_width.clamp(20.min(max_width), max_width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = (notification.message.width() as u16).div_ceil(inner_width).max(1);
    let height = (lines + 2).min(area.height);

    Rect::new(
        area.x + area.width - width,
        area.y,
        width,
        height,
    )
}

pub fn draw_notification(frame: &mut Frame, area: Rect, notification: &Notification, p: &Palette) {
    let (color, title) = match notification.level {
        NotificationLevel::Success => (p.success, " ✓ "),
        NotificationLevel::Error => (p.error, " ✗ "),
        NotificationLevel::Info => (p.accent, " i "),
    };

    let toast = toast_area(area, notification);
    frame.render_widget(Clear, toast);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        notification.message.clone(),
        Style::default().fg(p.fg),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", notification.formatted_time()),
                Style::default().fg(p.muted),
            )).right_aligned())
            .style(Style::default().bg(p.surface)),
    );
    frame.render_widget(paragraph, toast);
}
