//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::{Component, Point};
use crate::components::{
    draw_home_screen, draw_notification, ContactDialog, HelpDialog, HomeComponent,
    HomeRenderContext, LightboxComponent, ProjectModal, QuitDialog, SplashComponent,
};
use crate::config::Preferences;
use crate::error::RelayError;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::{GalleryLayer, GalleryState, Lightbox, Notification, Section};
use crate::services::{DeliveryOutcome, Dispatcher, MailRelay, Portfolio};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Owner, catalog and relay settings
    pub portfolio: Portfolio,

    /// Project modal / lightbox navigation
    pub gallery: GalleryState,

    /// Dialog overlay stack
    pub modals: ModalStack,

    /// Background contact message delivery
    pub dispatcher: Dispatcher,

    /// Persisted user preferences
    pub preferences: Preferences,

    /// Where preferences are saved; `None` keeps them in memory only
    preferences_path: Option<PathBuf>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current toast
    pub notification: Option<Notification>,

    /// Link to open in the browser (set by OpenLink action, handled by main loop)
    pub pending_link: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub project_modal: ProjectModal,
    pub lightbox: LightboxComponent,
    pub contact_dialog: ContactDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new(
        portfolio: Portfolio,
        preferences: Preferences,
        relay: Arc<dyn MailRelay>,
        preferences_path: Option<PathBuf>,
    ) -> App {
        let mut home = HomeComponent::new();
        home.set_catalog(&portfolio.catalog);

        let owner = &portfolio.owner;
        let splash = SplashComponent::new(owner.name.clone(), owner.tagline.clone());
        let contact_dialog = ContactDialog::new(owner.email.clone());

        let mut app = App {
            mode: AppMode::Splash,
            portfolio,
            gallery: GalleryState::new(),
            modals: ModalStack::new(),
            dispatcher: Dispatcher::new(relay),
            preferences,
            preferences_path,
            should_quit: false,
            error: None,
            status_message: None,
            notification: None,
            pending_link: None,
            splash,
            home,
            project_modal: ProjectModal::new(),
            lightbox: LightboxComponent::new(),
            contact_dialog,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        };
        app.apply_theme();
        app
    }

    /// Show a toast, replacing the current one
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the toast once its lifetime has passed
    pub fn expire_notification_at(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.notification = None;
        }
    }

    /// Hand the requested link, if any, to `open` and report the result
    pub fn open_pending_link<F>(&mut self, open: F)
    where
        F: FnOnce(&str) -> Result<()>,
    {
        let Some(url) = self.pending_link.take() else {
            return;
        };
        match open(&url) {
            Ok(()) => self.status_message = Some(format!("Opened {}", url)),
            Err(e) => {
                warn!(%url, error = %e, "failed to open link");
                self.notify(Notification::error(format!("{:#}", e)));
            }
        }
    }

    fn apply_theme(&mut self) {
        let palette = self.preferences.theme.palette();
        self.splash.palette = palette;
        self.project_modal.palette = palette;
        self.lightbox.palette = palette;
        self.contact_dialog.palette = palette;
        self.quit_dialog.palette = palette;
        self.help_dialog.palette = palette;
    }

    fn toggle_theme(&mut self) {
        self.preferences.theme = self.preferences.theme.toggle();
        self.apply_theme();
        info!(theme = self.preferences.theme.as_str(), "theme changed");

        if let Some(path) = &self.preferences_path {
            if let Err(e) = self.preferences.save_to(path) {
                warn!(error = %e, "failed to save preferences");
                self.error = Some(format!("Could not save theme: {}", e));
            }
        }
    }

    /// Mirror the gallery's lightbox into the lightbox component
    fn sync_lightbox(&mut self) {
        self.lightbox
            .set_view(self.gallery.lightbox().map(Lightbox::view));
    }

    fn open_project_modal(&mut self, key: &str) {
        if self.gallery.open_modal(&self.portfolio.catalog, key) {
            if let Some(category) = self.portfolio.catalog.get(key) {
                self.project_modal.show(category);
            }
            self.sync_lightbox();
        }
    }

    fn close_project_modal(&mut self) {
        self.gallery.close_modal();
        self.project_modal.clear();
        self.sync_lightbox();
    }

    /// Background scroll is frozen while anything is drawn over the home screen
    fn scroll_locked(&self) -> bool {
        self.gallery.scroll_locked() || !self.modals.is_empty()
    }

    fn scroll(&mut self, down: bool) {
        if self.scroll_locked() {
            debug!("scroll ignored while an overlay is open");
            return;
        }
        match (self.home.active_section, down) {
            (Section::About, true) => self.home.scroll_down(),
            (Section::About, false) => self.home.scroll_up(),
            (Section::Projects, true) => self.home.next(),
            (Section::Projects, false) => self.home.previous(),
            (Section::Contact, _) => {}
        }
    }

    fn submit_contact(&mut self) {
        if self.dispatcher.is_busy() {
            debug!("submit ignored while a message is being sent");
            return;
        }

        match self.contact_dialog.form.validate(&self.portfolio.owner.email) {
            Ok(message) => {
                if self.dispatcher.dispatch(message) {
                    info!("contact message dispatched");
                    self.contact_dialog.sending = true;
                    self.notify(Notification::info("Sending message..."));
                }
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    fn poll_delivery(&mut self) {
        let Some(outcome) = self.dispatcher.poll() else {
            return;
        };
        self.contact_dialog.sending = false;

        match outcome {
            DeliveryOutcome::Sent => {
                self.contact_dialog.form.reset();
                if self.modals.top() == Some(&Modal::Contact) {
                    self.modals.pop();
                }
                self.notify(Notification::success(SENT_MESSAGE));
            }
            DeliveryOutcome::Failed(RelayError::NotConfigured) => {
                self.notify(Notification::error(RelayError::NotConfigured.to_string()));
            }
            DeliveryOutcome::Failed(_) => {
                self.notify(Notification::error(format!(
                    "Failed to send message. Please try again later or contact me directly at {}",
                    self.portfolio.owner.email
                )));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }
                // The topmost visible gallery layer gets the key
                match self.gallery.layer() {
                    GalleryLayer::Lightbox => self.lightbox.handle_key_event(key),
                    GalleryLayer::Modal => self.project_modal.handle_key_event(key),
                    GalleryLayer::Closed => self.home.handle_key_event(key),
                }
            }
        }
    }

    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => Ok(Some(Action::SplashComplete)),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return match modal {
                        Modal::QuitConfirm => self.quit_dialog.handle_click(at),
                        Modal::Help => Ok(None),
                        Modal::Contact => self.contact_dialog.handle_click(at),
                    };
                }
                match self.gallery.layer() {
                    GalleryLayer::Lightbox => self.lightbox.handle_click(at),
                    GalleryLayer::Modal => self.project_modal.handle_click(at),
                    GalleryLayer::Closed => self.home.handle_click(at),
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.expire_notification_at(Instant::now());
                self.poll_delivery();
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Sections & Home Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextSection => self.home.next_section(),
            Action::PrevSection => self.home.previous_section(),
            Action::SelectSection(section) => self.home.select_section(section),
            Action::NextItem => self.home.next(),
            Action::PrevItem => self.home.previous(),
            Action::ScrollDown => self.scroll(true),
            Action::ScrollUp => self.scroll(false),
            Action::ToggleTheme => self.toggle_theme(),

            // ─────────────────────────────────────────────────────────────────
            // Gallery
            // ─────────────────────────────────────────────────────────────────
            Action::OpenProjectModal(key) => self.open_project_modal(&key),
            Action::CloseProjectModal => self.close_project_modal(),
            Action::OpenLightbox(index) => {
                if self.gallery.open_lightbox(index) {
                    self.project_modal.focused = index;
                    self.sync_lightbox();
                }
            }
            Action::CloseLightbox => {
                self.gallery.close_lightbox();
                self.sync_lightbox();
            }
            Action::LightboxNext => {
                if self.gallery.next() {
                    self.sync_lightbox();
                }
            }
            Action::LightboxPrev => {
                if self.gallery.prev() {
                    self.sync_lightbox();
                }
            }
            Action::OpenLink(url) => {
                info!(%url, "opening link");
                self.pending_link = Some(url);
            }

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenContactForm => self.modals.push(Modal::Contact),
            Action::SubmitContact => self.submit_contact(),
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let theme = self.preferences.theme;
                let ctx = HomeRenderContext {
                    profile: &self.portfolio.owner,
                    theme,
                    palette: theme.palette(),
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };
                draw_home_screen(frame, area, &mut self.home, &ctx)?;

                match self.gallery.layer() {
                    GalleryLayer::Closed => {}
                    GalleryLayer::Modal => self.project_modal.draw(frame, area)?,
                    GalleryLayer::Lightbox => {
                        self.project_modal.draw(frame, area)?;
                        self.lightbox.draw(frame, area)?;
                    }
                }

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }

                if let Some(notification) = &self.notification {
                    draw_notification(frame, area, notification, &theme.palette());
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Contact => self.contact_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Contact => self.contact_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactField, LinkKind, NotificationLevel, Theme};
    use crate::model::notification::NOTIFICATION_TTL;
    use crate::services::dispatcher::tests::RecordingRelay;
    use anyhow::Context;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use std::time::Duration;

    fn app_with(relay: Arc<dyn MailRelay>) -> App {
        let mut app = App::new(Portfolio::builtin(), Preferences::default(), relay, None);
        app.init().unwrap();
        run(&mut app, Action::SplashComplete);
        app
    }

    fn app() -> App {
        app_with(Arc::new(RecordingRelay::default()))
    }

    fn run(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            run(app, action);
        }
    }

    fn click(app: &mut App, x: u16, y: u16) {
        if let Some(action) = app.handle_click(Point::new(x, y)).unwrap() {
            run(app, action);
        }
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
    }

    /// Tick until the dispatcher reports back
    fn tick_until_delivered(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.dispatcher.is_busy() {
            assert!(Instant::now() < deadline, "delivery did not finish");
            std::thread::sleep(Duration::from_millis(5));
            run(app, Action::Tick);
        }
    }

    fn fill_contact_form(app: &mut App) {
        let form = &mut app.contact_dialog.form;
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Loved the web projects".to_string();
        form.focus = ContactField::Message;
    }

    #[test]
    fn test_web_tile_button_click_only_opens_link() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("web".to_string()));
        draw(&mut app);

        let button = app.project_modal.button_area(1, LinkKind::Github).unwrap();
        click(&mut app, button.x + 1, button.y);

        assert_eq!(
            app.pending_link.as_deref(),
            Some("https://github.com/FatmaEsam/science-project-2")
        );
        assert_eq!(app.gallery.layer(), GalleryLayer::Modal);
        assert!(app.lightbox.view().is_none());
    }

    #[test]
    fn test_opened_link_shows_in_status_bar() {
        let mut app = app();
        run(&mut app, Action::OpenLink("https://example.com/a".to_string()));

        let mut opened = Vec::new();
        app.open_pending_link(|url| {
            opened.push(url.to_string());
            Ok(())
        });
        assert_eq!(opened, vec!["https://example.com/a".to_string()]);
        assert!(app.pending_link.is_none());
        assert_eq!(app.status_message.as_deref(), Some("Opened https://example.com/a"));

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Opened https://example.com/a"));

        // Nothing pending, nothing opened
        app.open_pending_link(|_| panic!("no link should be opened"));
    }

    #[test]
    fn test_failed_link_open_is_notified() {
        let mut app = app();
        run(&mut app, Action::OpenLink("https://example.com/b".to_string()));
        app.open_pending_link(|url| {
            Err(anyhow::anyhow!("no browser")).with_context(|| format!("Failed to open {}", url))
        });

        assert!(app.status_message.is_none());
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Failed to open https://example.com/b: no browser");
    }

    #[test]
    fn test_tile_click_opens_lightbox_at_that_image() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("web".to_string()));
        draw(&mut app);

        let tile = app.project_modal.tile_area(2).unwrap();
        click(&mut app, tile.x + 1, tile.y + 1);

        assert_eq!(app.gallery.layer(), GalleryLayer::Lightbox);
        let view = app.lightbox.view().unwrap();
        assert_eq!(view.src, "images/web/web-3.jpg");
        assert_eq!(view.label, "Image 3 of 4");
        assert!(view.show_prev && view.show_next);
    }

    #[test]
    fn test_escape_closes_lightbox_before_modal() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("ux".to_string()));
        run(&mut app, Action::OpenLightbox(4));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.gallery.layer(), GalleryLayer::Modal);
        assert_eq!(app.gallery.open_category(), Some("ux"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.gallery.layer(), GalleryLayer::Closed);
    }

    #[test]
    fn test_arrows_are_inert_at_edges() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("graphic".to_string()));
        run(&mut app, Action::OpenLightbox(0));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.gallery.lightbox().unwrap().index(), 0);
        assert!(!app.lightbox.view().unwrap().show_prev);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.gallery.lightbox().unwrap().index(), 4);
        assert_eq!(app.lightbox.view().unwrap().label, "Image 5 of 5");
        assert!(!app.lightbox.view().unwrap().show_next);
    }

    #[test]
    fn test_lightbox_swallows_other_keys() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("graphic".to_string()));
        run(&mut app, Action::OpenLightbox(1));

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.gallery.layer(), GalleryLayer::Modal);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.preferences.theme, Theme::Light);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_backdrop_click_closes_modal() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("graphic".to_string()));
        draw(&mut app);

        click(&mut app, 0, 0);
        assert_eq!(app.gallery.layer(), GalleryLayer::Closed);
        assert!(app.gallery.sources().is_empty());
    }

    #[test]
    fn test_lightbox_backdrop_click_returns_to_modal() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("graphic".to_string()));
        run(&mut app, Action::OpenLightbox(2));
        draw(&mut app);

        click(&mut app, 0, 0);
        assert_eq!(app.gallery.layer(), GalleryLayer::Modal);
        assert!(app.lightbox.view().is_none());
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let mut app = app();
        run(&mut app, Action::OpenProjectModal("print".to_string()));
        assert_eq!(app.gallery.layer(), GalleryLayer::Closed);
        assert!(app.project_modal.tiles().is_empty());
    }

    #[test]
    fn test_home_scroll_locked_while_overlay_visible() {
        let mut app = app();
        draw(&mut app);
        assert_eq!(app.home.active_section, Section::About);

        run(&mut app, Action::OpenProjectModal("ux".to_string()));
        run(&mut app, Action::ScrollDown);
        run(&mut app, Action::OpenLightbox(0));
        run(&mut app, Action::ScrollDown);
        assert_eq!(app.home.about_scroll, 0);

        run(&mut app, Action::CloseProjectModal);
        run(&mut app, Action::ScrollDown);
        assert_eq!(app.home.about_scroll, 1);
    }

    #[test]
    fn test_theme_toggle_persists_preference() {
        let dir = std::env::temp_dir().join(format!("folio-tui-app-{}", std::process::id()));
        let path = dir.join("preferences.json");
        let mut app = App::new(
            Portfolio::builtin(),
            Preferences::default(),
            Arc::new(RecordingRelay::default()),
            Some(path.clone()),
        );

        run(&mut app, Action::ToggleTheme);
        assert_eq!(app.preferences.theme, Theme::Dark);
        assert_eq!(app.lightbox.palette, Theme::Dark.palette());
        assert_eq!(Preferences::load_from(&path).theme, Theme::Dark);

        run(&mut app, Action::ToggleTheme);
        assert_eq!(Preferences::load_from(&path).theme, Theme::Light);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_contact_validation_error_is_notified() {
        let relay = Arc::new(RecordingRelay::default());
        let mut app = app_with(relay.clone());
        run(&mut app, Action::OpenContactForm);
        run(&mut app, Action::SubmitContact);

        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Please fill in all fields");
        assert!(!app.dispatcher.is_busy());
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_contact_success_resets_and_closes_form() {
        let relay = Arc::new(RecordingRelay::default());
        let mut app = app_with(relay.clone());
        run(&mut app, Action::OpenContactForm);
        fill_contact_form(&mut app);

        run(&mut app, Action::SubmitContact);
        assert!(app.contact_dialog.sending);
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Info);
        assert_eq!(notification.message, "Sending message...");
        tick_until_delivered(&mut app);

        assert!(!app.contact_dialog.sending);
        assert!(app.modals.is_empty());
        assert_eq!(app.contact_dialog.form.name, "");
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.message, SENT_MESSAGE);

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "fatmaesam263@gmail.com");
        assert_eq!(sent[0].subject, None);
    }

    #[test]
    fn test_contact_failure_keeps_form_and_names_owner_email() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..Default::default()
        });
        let mut app = app_with(relay);
        run(&mut app, Action::OpenContactForm);
        fill_contact_form(&mut app);

        run(&mut app, Action::SubmitContact);
        tick_until_delivered(&mut app);

        assert_eq!(app.modals.top(), Some(&Modal::Contact));
        assert_eq!(app.contact_dialog.form.name, "Ada");
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(notification.message.contains("fatmaesam263@gmail.com"));
    }

    #[test]
    fn test_notification_expires_after_lifetime() {
        let mut app = app();
        app.notify(Notification::info("hello"));
        app.expire_notification_at(Instant::now());
        assert!(app.notification.is_some());

        app.expire_notification_at(Instant::now() + NOTIFICATION_TTL);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_dialog_takes_keys_before_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home.about_scroll, 0);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_project_card_enter_opens_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.gallery.open_category(), Some("ux"));
        assert_eq!(app.project_modal.title(), "UI/UX Design Projects");
        assert_eq!(app.project_modal.tiles().len(), 8);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }
}
