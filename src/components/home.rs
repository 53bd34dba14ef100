//! Home component - Main application screen
//!
//! Displays the section tabs, the About / Projects / Contact content, the
//! status line and the help bar. Owns section navigation and the project
//! card selection.

use crate::action::Action;
use crate::component::{Component, Point};
use crate::components::layout::calculate_main_layout;
use crate::model::{Catalog, CategoryKind, Palette, Profile, Section, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows taken by one project card in the list
const CARD_HEIGHT: u16 = 3;

// ═══════════════════════════════════════════════════════════════════════════════
// Project Cards
// ═══════════════════════════════════════════════════════════════════════════════

/// Summary of a category shown on the Projects section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub key: String,
    pub title: String,
    pub kind: CategoryKind,
    pub count: usize,
}

impl ProjectCard {
    fn links_caption(&self) -> String {
        let labels: Vec<&str> = self.kind.link_kinds().iter().map(|k| k.label()).collect();
        if labels.is_empty() {
            String::new()
        } else {
            format!(" · {}", labels.join(", "))
        }
    }
}

/// Clickable areas from the last draw
#[derive(Debug, Clone, Default)]
struct Regions {
    tabs: Vec<(Rect, Section)>,
    cards: Vec<(Rect, usize)>,
    contact_button: Option<Rect>,
    theme_toggle: Rect,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
pub struct HomeComponent {
    /// Current section tab
    pub active_section: Section,

    /// Project card selection state
    pub list_state: ListState,

    /// About section scroll offset
    pub about_scroll: u16,

    about_lines: u16,
    cards: Vec<ProjectCard>,
    regions: Regions,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_section: Section::About,
            list_state: ListState::default(),
            about_scroll: 0,
            about_lines: 0,
            cards: Vec::new(),
            regions: Regions::default(),
        }
    }

    /// Build one card per category, in catalog order
    pub fn set_catalog(&mut self, catalog: &Catalog) {
        self.cards = catalog
            .categories()
            .iter()
            .map(|c| ProjectCard {
                key: c.key.clone(),
                title: c.title.clone(),
                kind: c.kind,
                count: c.images.len(),
            })
            .collect();
        self.list_state
            .select(if self.cards.is_empty() { None } else { Some(0) });
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn selected_card(&self) -> Option<&ProjectCard> {
        self.cards.get(self.list_state.selected()?)
    }

    #[cfg(test)]
    pub fn tab_area(&self, section: Section) -> Option<Rect> {
        self.regions
            .tabs
            .iter()
            .find(|(_, s)| *s == section)
            .map(|(area, _)| *area)
    }

    #[cfg(test)]
    pub fn card_area(&self, index: usize) -> Option<Rect> {
        self.regions
            .cards
            .iter()
            .find(|(_, i)| *i == index)
            .map(|(area, _)| *area)
    }

    #[cfg(test)]
    pub fn contact_button_area(&self) -> Option<Rect> {
        self.regions.contact_button
    }

    #[cfg(test)]
    pub fn theme_toggle_area(&self) -> Rect {
        self.regions.theme_toggle
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn next_section(&mut self) {
        let sections = Section::all();
        let current = sections
            .iter()
            .position(|s| *s == self.active_section)
            .unwrap_or(0);
        self.active_section = sections[(current + 1) % sections.len()];
    }

    pub fn previous_section(&mut self) {
        let sections = Section::all();
        let current = sections
            .iter()
            .position(|s| *s == self.active_section)
            .unwrap_or(0);
        let prev = if current == 0 {
            sections.len() - 1
        } else {
            current - 1
        };
        self.active_section = sections[prev];
    }

    /// Select the next card, wrapping to the first
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.cards.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Select the previous card, wrapping to the last
    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.cards.len() - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn scroll_down(&mut self) {
        if self.about_scroll + 1 < self.about_lines.max(1) {
            self.about_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.about_scroll = self.about_scroll.saturating_sub(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let in_projects = self.active_section == Section::Projects;
        let action = match key.code {
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PrevSection),
            KeyCode::Char(c @ '1'..='9') => Section::from_digit(c).map(Action::SelectSection),

            KeyCode::Char('j') | KeyCode::Down if in_projects => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up if in_projects => Some(Action::PrevItem),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),

            KeyCode::Enter => match self.active_section {
                Section::Projects => self
                    .selected_card()
                    .map(|card| Action::OpenProjectModal(card.key.clone())),
                Section::Contact => Some(Action::OpenContactForm),
                Section::About => None,
            },

            KeyCode::Char('c') => Some(Action::OpenContactForm),
            KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTheme),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        if let Some((_, section)) = self.regions.tabs.iter().find(|(area, _)| at.within(*area)) {
            return Ok(Some(Action::SelectSection(*section)));
        }
        if at.within(self.regions.theme_toggle) {
            return Ok(Some(Action::ToggleTheme));
        }
        if let Some(&(_, index)) = self.regions.cards.iter().find(|(area, _)| at.within(*area)) {
            self.list_state.select(Some(index));
            return Ok(self
                .cards
                .get(index)
                .map(|card| Action::OpenProjectModal(card.key.clone())));
        }
        if self.regions.contact_button.is_some_and(|area| at.within(area)) {
            return Ok(Some(Action::OpenContactForm));
        }
        Ok(None)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // App calls the navigation methods directly
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub profile: &'a Profile,
    pub theme: Theme,
    pub palette: Palette,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let p = ctx.palette;
    frame.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
        area,
    );

    let layout = calculate_main_layout(area);
    let mut regions = Regions {
        tabs: render_tabs(frame, layout.tabs, home, &p),
        ..Regions::default()
    };

    match home.active_section {
        Section::About => render_about(frame, layout.content, home, ctx),
        Section::Projects => regions.cards = render_projects(frame, layout.content, home, &p),
        Section::Contact => {
            regions.contact_button = Some(render_contact(frame, layout.content, ctx))
        }
    }

    regions.theme_toggle = render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home, &p);

    home.regions = regions;
    Ok(())
}

fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    p: &Palette,
) -> Vec<(Rect, Section)> {
    let sections = Section::all();
    let titles: Vec<String> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.name()))
        .collect();
    let selected = sections
        .iter()
        .position(|s| *s == home.active_section)
        .unwrap_or(0);

    // Tabs draws " title " separated by "│"
    let mut regions = Vec::new();
    let mut x = area.x;
    for (title, section) in titles.iter().zip(sections.iter()) {
        let width = title.width() as u16 + 2;
        if x >= area.x + area.width {
            break;
        }
        let clipped = width.min(area.x + area.width - x);
        regions.push((Rect::new(x, area.y, clipped, 1), *section));
        x += width + 1;
    }

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(p.border)),
        )
        .select(selected)
        .style(Style::default().fg(p.muted))
        .highlight_style(Style::default().fg(p.accent).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
    regions
}

fn render_about(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let p = ctx.palette;
    let profile = ctx.profile;

    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(p.muted),
        )),
        Line::from(""),
    ];
    lines.extend(
        profile
            .about
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(p.fg)))),
    );

    if !profile.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Skills",
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        )));
        for skill in &profile.skills {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(p.accent)),
                Span::styled(skill.clone(), Style::default().fg(p.fg)),
            ]));
        }
    }

    home.about_lines = lines.len() as u16;
    home.about_scroll = home.about_scroll.min(home.about_lines.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .border_style(Style::default().fg(p.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((home.about_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_projects(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    p: &Palette,
) -> Vec<(Rect, usize)> {
    let items: Vec<ListItem> = home
        .cards
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    card.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {} images{}", card.count, card.links_caption()),
                    Style::default().fg(p.muted),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Projects ({}) ", home.cards.len()))
        .border_style(Style::default().fg(p.border));
    let inner = block.inner(area);

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(p.fg))
        .highlight_style(
            Style::default()
                .bg(p.accent)
                .fg(p.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);

    let offset = home.list_state.offset();
    let mut regions = Vec::new();
    for index in offset..home.cards.len() {
        let y = inner.y + (index - offset) as u16 * CARD_HEIGHT;
        if y >= inner.y + inner.height {
            break;
        }
        let height = CARD_HEIGHT.min(inner.y + inner.height - y);
        regions.push((Rect::new(inner.x, y, inner.width, height), index));
    }
    regions
}

fn render_contact(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) -> Rect {
    let p = ctx.palette;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contact ")
        .border_style(Style::default().fg(p.border));
    let inner = block.inner(area);

    let lines = vec![
        Line::from(Span::styled(
            "Get in touch",
            Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(p.muted)),
            Span::styled(ctx.profile.email.clone(), Style::default().fg(p.link)),
        ]),
        Line::from(""),
    ];
    let text_height = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let caption = "[ Send a message ]";
    let button = Rect::new(
        inner.x,
        inner.y + text_height.min(inner.height.saturating_sub(1)),
        (caption.width() as u16).min(inner.width),
        1.min(inner.height),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            caption,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        button,
    );
    button
}

/// Returns the area of the theme toggle glyph
fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) -> Rect {
    let p = ctx.palette;
    let mut spans = vec![Span::styled(
        format!(" {} ", ctx.profile.name),
        Style::default()
            .fg(p.highlight_fg)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(p.error),
        ));
    } else if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(p.muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let toggle = format!(" {} {} ", ctx.theme.icon(), ctx.theme.as_str());
    let width = (toggle.width() as u16).min(area.width);
    let toggle_area = Rect::new(area.x + area.width - width, area.y, width, area.height);
    frame.render_widget(
        Paragraph::new(Span::styled(
            toggle,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        toggle_area,
    );
    toggle_area
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, p: &Palette) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(p.accent).add_modifier(Modifier::BOLD))
    };

    let mut spans = vec![key(" q "), Span::raw("Quit "), key(" Tab "), Span::raw("Section ")];
    match home.active_section {
        Section::About => {
            spans.extend([key(" j/k "), Span::raw("Scroll ")]);
        }
        Section::Projects => {
            spans.extend([key(" j/k "), Span::raw("Select "), key(" Enter "), Span::raw("Open ")]);
        }
        Section::Contact => {
            spans.extend([key(" Enter "), Span::raw("Write ")]);
        }
    }
    spans.extend([
        key(" c "),
        Span::raw("Contact "),
        key(" t "),
        Span::raw("Theme "),
        key(" ? "),
        Span::raw("Help"),
    ]);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(p.muted)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn home() -> HomeComponent {
        let mut home = HomeComponent::new();
        home.set_catalog(&Catalog::builtin());
        home
    }

    fn draw(home: &mut HomeComponent) {
        let profile = Profile::default();
        let ctx = HomeRenderContext {
            profile: &profile,
            theme: Theme::Light,
            palette: Theme::Light.palette(),
            error: None,
            status_message: None,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                draw_home_screen(frame, frame.area(), home, &ctx).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_cards_follow_catalog() {
        let home = home();
        let keys: Vec<&str> = home.cards().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["graphic", "ux", "web"]);
        assert_eq!(home.selected_card().map(|c| c.count), Some(5));
    }

    #[test]
    fn test_section_cycling_wraps() {
        let mut home = home();
        home.previous_section();
        assert_eq!(home.active_section, Section::Contact);
        home.next_section();
        assert_eq!(home.active_section, Section::About);
    }

    #[test]
    fn test_card_selection_wraps() {
        let mut home = home();
        home.previous();
        assert_eq!(home.selected_card().unwrap().key, "web");
        home.next();
        assert_eq!(home.selected_card().unwrap().key, "graphic");
    }

    #[test]
    fn test_enter_on_projects_opens_selected_category() {
        let mut home = home();
        home.select_section(Section::Projects);
        home.next();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenProjectModal("ux".to_string()))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('j'))).unwrap(),
            Some(Action::NextItem)
        );
    }

    #[test]
    fn test_jk_scrolls_outside_projects() {
        let mut home = home();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('j'))).unwrap(),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('2'))).unwrap(),
            Some(Action::SelectSection(Section::Projects))
        );
        assert_eq!(home.handle_key_event(key(KeyCode::Char('7'))).unwrap(), None);
    }

    #[test]
    fn test_click_card_opens_modal() {
        let mut home = home();
        home.select_section(Section::Projects);
        draw(&mut home);

        let area = home.card_area(2).unwrap();
        assert_eq!(
            home.handle_click(Point::new(area.x + 2, area.y)).unwrap(),
            Some(Action::OpenProjectModal("web".to_string()))
        );
        assert_eq!(home.selected_card().unwrap().key, "web");
    }

    #[test]
    fn test_click_tab_and_theme_toggle() {
        let mut home = home();
        draw(&mut home);

        let tab = home.tab_area(Section::Contact).unwrap();
        assert_eq!(
            home.handle_click(Point::new(tab.x + 1, tab.y)).unwrap(),
            Some(Action::SelectSection(Section::Contact))
        );

        let toggle = home.theme_toggle_area();
        assert_eq!(
            home.handle_click(Point::new(toggle.x + 1, toggle.y)).unwrap(),
            Some(Action::ToggleTheme)
        );
    }

    #[test]
    fn test_contact_button() {
        let mut home = home();
        home.select_section(Section::Contact);
        draw(&mut home);
        let button = home.contact_button_area().unwrap();
        assert_eq!(
            home.handle_click(Point::new(button.x, button.y)).unwrap(),
            Some(Action::OpenContactForm)
        );
    }

    #[test]
    fn test_about_scroll_is_bounded() {
        let mut home = home();
        draw(&mut home);
        home.scroll_up();
        assert_eq!(home.about_scroll, 0);
        for _ in 0..500 {
            home.scroll_down();
        }
        assert!(home.about_scroll < 500);
        assert!(home.about_scroll > 0);
    }
}
