//! Project modal component
//!
//! Shows every image of one category as a grid of tiles. Tiles of `ux` and
//! `web` categories carry link buttons; clicking a button opens only the link,
//! clicking anywhere else on a tile opens the lightbox at that tile.

use crate::action::Action;
use crate::component::{Component, Point};
use crate::components::layout::{centered_percent, truncate};
use crate::model::{Category, CategoryKind, LinkKind, Palette};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const TILE_WIDTH: u16 = 30;
const TILE_HEIGHT: u16 = 6;

/// A link button rendered on a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileButton {
    pub kind: LinkKind,
    pub url: String,
}

impl TileButton {
    fn caption(&self) -> String {
        format!("[{}]", self.kind.label())
    }
}

/// One rendered grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub src: String,
    pub file_name: String,
    pub alt: String,
    pub buttons: Vec<TileButton>,
}

/// Build the tiles for a category, one per image in catalog order
pub fn build_tiles(category: &Category) -> Vec<Tile> {
    category
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| Tile {
            index,
            src: image.src.clone(),
            file_name: image.file_name().to_string(),
            alt: format!("{} {}", category.title, index + 1),
            buttons: image
                .visible_links(category.kind)
                .into_iter()
                .map(|link| TileButton {
                    kind: link.kind,
                    url: link.url.clone(),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone)]
struct ButtonRegion {
    area: Rect,
    url: String,
}

#[derive(Debug, Clone)]
struct TileRegion {
    area: Rect,
    index: usize,
    buttons: Vec<ButtonRegion>,
}

/// Clickable areas from the last draw
#[derive(Debug, Clone, Default)]
struct Regions {
    content: Rect,
    close: Rect,
    tiles: Vec<TileRegion>,
}

/// Grid of one category's images
#[derive(Default)]
pub struct ProjectModal {
    pub palette: Palette,
    title: String,
    kind: CategoryKind,
    tiles: Vec<Tile>,
    /// Keyboard focus within `tiles`
    pub focused: usize,
    columns: usize,
    first_row: usize,
    regions: Regions,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title and rebuild the grid for `category`
    pub fn show(&mut self, category: &Category) {
        self.title = category.title.clone();
        self.kind = category.kind;
        self.tiles = build_tiles(category);
        self.focused = 0;
        self.first_row = 0;
        self.regions = Regions::default();
    }

    /// Forget the category shown
    pub fn clear(&mut self) {
        self.title.clear();
        self.tiles.clear();
        self.focused = 0;
        self.regions = Regions::default();
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles visible after the last draw
    #[cfg(test)]
    pub fn rendered_tiles(&self) -> usize {
        self.regions.tiles.len()
    }

    /// Screen area of a tile from the last draw
    #[cfg(test)]
    pub fn tile_area(&self, index: usize) -> Option<Rect> {
        self.regions
            .tiles
            .iter()
            .find(|t| t.index == index)
            .map(|t| t.area)
    }

    /// Screen area of a tile's link button from the last draw
    #[cfg(test)]
    pub fn button_area(&self, index: usize, kind: LinkKind) -> Option<Rect> {
        let tile = self.regions.tiles.iter().find(|t| t.index == index)?;
        let position = self.tiles.get(index)?.buttons.iter().position(|b| b.kind == kind)?;
        tile.buttons.get(position).map(|b| b.area)
    }

    #[cfg(test)]
    pub fn close_area(&self) -> Rect {
        self.regions.close
    }

    #[cfg(test)]
    pub fn content_area(&self) -> Rect {
        self.regions.content
    }

    fn move_focus(&mut self, delta: isize) {
        if self.tiles.is_empty() {
            return;
        }
        let target = self.focused as isize + delta;
        if target >= 0 && (target as usize) < self.tiles.len() {
            self.focused = target as usize;
        }
    }

    fn focused_link(&self, shortcut: char) -> Option<Action> {
        self.tiles
            .get(self.focused)?
            .buttons
            .iter()
            .find(|b| b.kind.shortcut() == shortcut)
            .map(|b| Action::OpenLink(b.url.clone()))
    }

    fn draw_tile(&self, frame: &mut Frame, area: Rect, tile: &Tile) -> TileRegion {
        let p = self.palette;
        let focused = tile.index == self.focused;
        let border = if focused { p.accent } else { p.border };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", tile.index + 1))
            .style(Style::default().bg(p.surface).fg(p.fg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                truncate(&format!("▣ {}", tile.file_name), width),
                Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&tile.alt, width),
                Style::default().fg(p.muted),
            )),
        ];

        // Buttons share one row; the ones that do not fit are left out
        let mut buttons = Vec::new();
        let mut spans = Vec::new();
        let button_y = inner.y + 3;
        let mut x = inner.x;
        for button in &tile.buttons {
            let caption = button.caption();
            let caption_width = caption.width() as u16;
            if inner.height < 4 || x + caption_width > inner.x + inner.width {
                break;
            }
            buttons.push(ButtonRegion {
                area: Rect::new(x, button_y, caption_width, 1),
                url: button.url.clone(),
            });
            spans.push(Span::styled(
                caption,
                Style::default().fg(p.link).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            x += caption_width + 1;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));

        frame.render_widget(Paragraph::new(lines), inner);

        TileRegion {
            area,
            index: tile.index,
            buttons,
        }
    }
}

impl Component for ProjectModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let columns = self.columns.max(1) as isize;
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseProjectModal),
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_focus(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_focus(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(-columns);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(columns);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') if !self.tiles.is_empty() => {
                Some(Action::OpenLightbox(self.focused))
            }
            KeyCode::Char(c) => self.focused_link(c),
            _ => None,
        };
        Ok(action)
    }

    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        if at.within(self.regions.close) {
            return Ok(Some(Action::CloseProjectModal));
        }

        // Buttons first: a button click never reaches its tile
        for tile in &self.regions.tiles {
            if let Some(button) = tile.buttons.iter().find(|b| at.within(b.area)) {
                return Ok(Some(Action::OpenLink(button.url.clone())));
            }
        }

        if let Some(tile) = self.regions.tiles.iter().find(|t| at.within(t.area)) {
            self.focused = tile.index;
            return Ok(Some(Action::OpenLightbox(tile.index)));
        }

        if !at.within(self.regions.content) {
            return Ok(Some(Action::CloseProjectModal));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let p = self.palette;

        // Backdrop
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(p.bg)), area);

        let content = centered_percent(area, 90, 85);
        frame.render_widget(Clear, content);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(p.surface).fg(p.fg));
        let inner = block.inner(content);
        frame.render_widget(block, content);

        let close = Rect::new(
            content.x + content.width.saturating_sub(5),
            content.y,
            3.min(content.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[x]",
                Style::default().fg(p.error).add_modifier(Modifier::BOLD),
            )),
            close,
        );

        let footer_height = 1.min(inner.height);
        let grid = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height - footer_height,
        );
        let footer = Rect::new(inner.x, grid.y + grid.height, inner.width, footer_height);

        let columns = (grid.width / TILE_WIDTH).max(1) as usize;
        let visible_rows = (grid.height / TILE_HEIGHT) as usize;
        self.columns = columns;

        // Keep the focused tile's row on screen
        let focused_row = self.focused / columns;
        if focused_row < self.first_row {
            self.first_row = focused_row;
        } else if visible_rows > 0 && focused_row >= self.first_row + visible_rows {
            self.first_row = focused_row + 1 - visible_rows;
        }

        let tile_width = (grid.width / columns as u16).min(TILE_WIDTH).max(1);
        let mut tiles = Vec::new();
        for tile in self.tiles.iter().skip(self.first_row * columns) {
            let row = tile.index / columns - self.first_row;
            if row >= visible_rows {
                break;
            }
            let col = tile.index % columns;
            let tile_area = Rect::new(
                grid.x + col as u16 * tile_width,
                grid.y + row as u16 * TILE_HEIGHT,
                tile_width,
                TILE_HEIGHT,
            );
            tiles.push(self.draw_tile(frame, tile_area, tile));
        }

        if self.tiles.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No images in this category yet.",
                    Style::default().fg(p.muted),
                )),
                grid,
            );
        }

        let mut hints = vec![
            Span::styled(" Esc ", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::raw("Close  "),
            Span::styled(" ←↑↓→ ", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::raw("Move  "),
            Span::styled(" Enter ", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::raw("View  "),
        ];
        for kind in self.kind.link_kinds() {
            hints.push(Span::styled(
                format!(" {} ", kind.shortcut()),
                Style::default().fg(p.link).add_modifier(Modifier::BOLD),
            ));
            hints.push(Span::raw(format!("{}  ", kind.label())));
        }
        hints.push(Span::styled(
            format!("{} images", self.tiles.len()),
            Style::default().fg(p.muted),
        ));
        frame.render_widget(Paragraph::new(Line::from(hints)), footer);

        self.regions = Regions {
            content,
            close,
            tiles,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shown(key: &str) -> ProjectModal {
        let catalog = Catalog::builtin();
        let mut modal = ProjectModal::new();
        modal.show(catalog.get(key).unwrap());
        modal
    }

    fn drawn(key: &str, width: u16, height: u16) -> ProjectModal {
        let mut modal = shown(key);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                modal.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        modal
    }

    #[test]
    fn test_tiles_follow_catalog_order() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let tiles = build_tiles(category);
            assert_eq!(tiles.len(), category.images.len());
            for (i, tile) in tiles.iter().enumerate() {
                assert_eq!(tile.index, i);
                assert_eq!(tile.src, category.images[i].src);
            }
        }
    }

    #[test]
    fn test_buttons_depend_on_kind() {
        let catalog = Catalog::builtin();
        assert!(build_tiles(catalog.get("graphic").unwrap())
            .iter()
            .all(|t| t.buttons.is_empty()));

        let ux = build_tiles(catalog.get("ux").unwrap());
        assert!(ux.iter().all(|t| t.buttons.len() == 1 && t.buttons[0].kind == LinkKind::Behance));

        let web = build_tiles(catalog.get("web").unwrap());
        let kinds: Vec<LinkKind> = web[0].buttons.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Github, LinkKind::Demo]);
    }

    #[test]
    fn test_show_sets_title_and_resets_focus() {
        let catalog = Catalog::builtin();
        let mut modal = shown("ux");
        modal.focused = 5;
        modal.show(catalog.get("web").unwrap());
        assert_eq!(modal.title(), "Web Development Projects");
        assert_eq!(modal.tiles().len(), 4);
        assert_eq!(modal.focused, 0);
    }

    #[test]
    fn test_draw_renders_every_tile_when_space_allows() {
        let modal = drawn("web", 140, 40);
        assert_eq!(modal.rendered_tiles(), 4);
        for i in 0..4 {
            assert!(modal.tile_area(i).is_some());
            assert!(modal.button_area(i, LinkKind::Github).is_some());
            assert!(modal.button_area(i, LinkKind::Demo).is_some());
        }
    }

    #[test]
    fn test_click_tile_opens_lightbox() {
        let mut modal = drawn("web", 140, 40);
        let area = modal.tile_area(2).unwrap();
        let action = modal.handle_click(Point::new(area.x + 1, area.y + 1)).unwrap();
        assert_eq!(action, Some(Action::OpenLightbox(2)));
        assert_eq!(modal.focused, 2);
    }

    #[test]
    fn test_click_button_only_opens_link() {
        let mut modal = drawn("web", 140, 40);
        let area = modal.button_area(1, LinkKind::Github).unwrap();
        let action = modal.handle_click(Point::new(area.x, area.y)).unwrap();
        assert_eq!(
            action,
            Some(Action::OpenLink(
                "https://github.com/FatmaEsam/science-project-2".to_string()
            ))
        );
    }

    #[test]
    fn test_click_backdrop_and_close_control() {
        let mut modal = drawn("graphic", 140, 40);
        assert_eq!(
            modal.handle_click(Point::new(0, 0)).unwrap(),
            Some(Action::CloseProjectModal)
        );
        let close = modal.close_area();
        assert_eq!(
            modal.handle_click(Point::new(close.x, close.y)).unwrap(),
            Some(Action::CloseProjectModal)
        );
    }

    #[test]
    fn test_click_inside_content_between_tiles_does_nothing() {
        let mut modal = drawn("graphic", 140, 40);
        let content = modal.content_area();
        // Bottom-left inner cell is the footer, not a tile
        let at = Point::new(content.x + 1, content.y + content.height - 2);
        assert_eq!(modal.handle_click(at).unwrap(), None);
    }

    #[test]
    fn test_keyboard_focus_and_links() {
        let mut modal = shown("web");
        modal.handle_key_event(key(KeyCode::Right)).unwrap();
        modal.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(
            modal.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenLightbox(2))
        );
        assert_eq!(
            modal.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::OpenLink("https://fatmaesam.github.io/project-3/".to_string()))
        );
        assert_eq!(modal.handle_key_event(key(KeyCode::Char('b'))).unwrap(), None);

        // Focus stops at the last tile
        for _ in 0..10 {
            modal.handle_key_event(key(KeyCode::Right)).unwrap();
        }
        assert_eq!(modal.focused, 3);
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = shown("ux");
        assert_eq!(
            modal.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseProjectModal)
        );
    }
}
