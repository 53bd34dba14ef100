//! Gallery navigator state
//!
//! Owns the one piece of real state in the viewer: which category's modal is
//! open and, on top of it, where the lightbox is in that category's image
//! sequence. Every transition here is synchronous and pure; components turn
//! key presses and clicks into the calls below and render the result.

use crate::model::catalog::Catalog;
use tracing::debug;

/// Which overlays are currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryLayer {
    /// No overlay
    Closed,
    /// Project modal only
    Modal,
    /// Lightbox stacked on the project modal
    Lightbox,
}

/// What the lightbox should display for its current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub src: String,
    pub label: String,
    pub show_prev: bool,
    pub show_next: bool,
}

/// Single-image viewer over an ordered image sequence
///
/// `index` is always within `[0, images.len())`: construction refuses empty
/// sequences and out-of-range starts, and navigation is inert at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
}

impl Lightbox {
    /// Open over `images` at `start`, or `None` if that would be out of bounds
    pub fn open(images: Vec<String>, start: usize) -> Option<Self> {
        if start >= images.len() {
            return None;
        }
        Some(Self {
            images,
            index: start,
        })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    /// Advance one image; returns false at the last image
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one image; returns false at the first image
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> LightboxView {
        LightboxView {
            src: self.current().to_string(),
            label: format!("Image {} of {}", self.index + 1, self.images.len()),
            show_prev: self.has_prev(),
            show_next: self.has_next(),
        }
    }
}

/// Process-wide gallery state, mutated only through the methods below
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    open_category: Option<String>,
    sources: Vec<String>,
    lightbox: Option<Lightbox>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the project modal for `key`; unknown keys leave state untouched
    pub fn open_modal(&mut self, catalog: &Catalog, key: &str) -> bool {
        let Some(category) = catalog.get(key) else {
            debug!(category = key, "ignoring open for unknown category");
            return false;
        };

        self.open_category = Some(category.key.clone());
        self.sources = category.sources();
        self.lightbox = None;
        debug!(category = key, images = self.sources.len(), "project modal opened");
        true
    }

    /// Close the project modal (and anything stacked on it)
    pub fn close_modal(&mut self) {
        self.lightbox = None;
        self.sources.clear();
        self.open_category = None;
    }

    /// Open the lightbox over the open category at `index`
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        if self.open_category.is_none() {
            debug!(index, "ignoring lightbox open without a project modal");
            return false;
        }
        match Lightbox::open(self.sources.clone(), index) {
            Some(lightbox) => {
                self.lightbox = Some(lightbox);
                true
            }
            None => {
                debug!(index, len = self.sources.len(), "ignoring out of range lightbox open");
                false
            }
        }
    }

    /// Close the lightbox, returning to the modal beneath it
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn next(&mut self) -> bool {
        self.lightbox.as_mut().is_some_and(Lightbox::next)
    }

    pub fn prev(&mut self) -> bool {
        self.lightbox.as_mut().is_some_and(Lightbox::prev)
    }

    pub fn layer(&self) -> GalleryLayer {
        match (&self.open_category, &self.lightbox) {
            (None, _) => GalleryLayer::Closed,
            (Some(_), None) => GalleryLayer::Modal,
            (Some(_), Some(_)) => GalleryLayer::Lightbox,
        }
    }

    /// Background content must not scroll while any overlay is visible
    pub fn scroll_locked(&self) -> bool {
        self.layer() != GalleryLayer::Closed
    }

    #[cfg(test)]
    pub fn open_category(&self) -> Option<&str> {
        self.open_category.as_deref()
    }

    #[cfg(test)]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("img-{}.jpg", i)).collect()
    }

    #[test]
    fn test_lightbox_rejects_empty_and_out_of_range() {
        assert!(Lightbox::open(vec![], 0).is_none());
        assert!(Lightbox::open(images(3), 3).is_none());
        assert!(Lightbox::open(images(3), 2).is_some());
    }

    #[test]
    fn test_lightbox_round_trip_from_every_index() {
        let len = 6;
        for start in 0..len {
            let mut lightbox = Lightbox::open(images(len), start).unwrap();
            for _ in 0..(len - 1 - start) {
                assert!(lightbox.next());
            }
            assert_eq!(lightbox.index(), len - 1);
            for _ in 0..(len - 1 - start) {
                assert!(lightbox.prev());
            }
            for _ in 0..start {
                assert!(lightbox.prev());
            }
            for _ in 0..start {
                assert!(lightbox.next());
            }
            assert_eq!(lightbox.current(), format!("img-{}.jpg", start + 1));
        }
    }

    #[test]
    fn test_lightbox_edges_are_inert() {
        let mut lightbox = Lightbox::open(images(3), 0).unwrap();
        let before = lightbox.clone();
        assert!(!lightbox.prev());
        assert_eq!(lightbox, before);

        let mut lightbox = Lightbox::open(images(3), 2).unwrap();
        let before = lightbox.clone();
        assert!(!lightbox.next());
        assert!(!lightbox.next());
        assert_eq!(lightbox, before);
    }

    #[test]
    fn test_lightbox_controls_hidden_exactly_at_edges() {
        let len = 5;
        for index in 0..len {
            let view = Lightbox::open(images(len), index).unwrap().view();
            assert_eq!(!view.show_prev, index == 0);
            assert_eq!(!view.show_next, index == len - 1);
        }
    }

    #[test]
    fn test_single_image_lightbox_has_no_controls() {
        let view = Lightbox::open(images(1), 0).unwrap().view();
        assert!(!view.show_prev);
        assert!(!view.show_next);
        assert_eq!(view.label, "Image 1 of 1");
    }

    #[test]
    fn test_open_web_tile_two() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();

        assert!(gallery.open_modal(&catalog, "web"));
        assert_eq!(gallery.sources().len(), 4);
        assert!(gallery.open_lightbox(2));

        let view = gallery.lightbox().unwrap().view();
        assert_eq!(view.src, "images/web/web-3.jpg");
        assert_eq!(view.label, "Image 3 of 4");
        assert!(view.show_prev);
        assert!(view.show_next);
    }

    #[test]
    fn test_unknown_category_is_noop() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();
        assert!(!gallery.open_modal(&catalog, "graduation"));
        assert_eq!(gallery.layer(), GalleryLayer::Closed);

        gallery.open_modal(&catalog, "ux");
        gallery.open_lightbox(1);
        let before = gallery.clone();
        assert!(!gallery.open_modal(&catalog, "nope"));
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_lightbox_requires_modal() {
        let mut gallery = GalleryState::new();
        assert!(!gallery.open_lightbox(0));
        assert_eq!(gallery.layer(), GalleryLayer::Closed);
        assert!(!gallery.next());
        assert!(!gallery.prev());
    }

    #[test]
    fn test_layers_close_one_at_a_time() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();
        gallery.open_modal(&catalog, "graphic");
        gallery.open_lightbox(4);
        assert_eq!(gallery.layer(), GalleryLayer::Lightbox);
        assert!(gallery.scroll_locked());

        gallery.close_lightbox();
        assert_eq!(gallery.layer(), GalleryLayer::Modal);
        assert_eq!(gallery.open_category(), Some("graphic"));
        assert!(gallery.scroll_locked());

        gallery.close_modal();
        assert_eq!(gallery.layer(), GalleryLayer::Closed);
        assert!(gallery.open_category().is_none());
        assert!(gallery.sources().is_empty());
        assert!(!gallery.scroll_locked());
    }

    #[test]
    fn test_reopen_overwrites_state() {
        let catalog = Catalog::builtin();
        let mut gallery = GalleryState::new();
        gallery.open_modal(&catalog, "ux");
        gallery.open_lightbox(7);

        assert!(gallery.open_modal(&catalog, "web"));
        assert_eq!(gallery.layer(), GalleryLayer::Modal);
        assert_eq!(gallery.sources().len(), 4);
        assert!(!gallery.open_lightbox(7));
    }

    #[test]
    fn test_empty_category_never_opens_lightbox() {
        use crate::model::catalog::{Category, CategoryKind};
        let catalog = Catalog::new(vec![Category {
            key: "empty".to_string(),
            title: "Empty".to_string(),
            kind: CategoryKind::Default,
            images: vec![],
        }])
        .unwrap();

        let mut gallery = GalleryState::new();
        assert!(gallery.open_modal(&catalog, "empty"));
        assert!(!gallery.open_lightbox(0));
        assert_eq!(gallery.layer(), GalleryLayer::Modal);
    }
}
