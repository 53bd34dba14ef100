//! Component trait - Interface for UI components
//!
//! Each component owns its presentation state, turns input into Actions and
//! renders itself. Clicks arrive already reduced to a terminal cell; a
//! component answers them from the regions it recorded on its last draw.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A terminal cell, column/row from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside `area`
    pub fn within(&self, area: Rect) -> bool {
        self.x >= area.x
            && self.x < area.x.saturating_add(area.width)
            && self.y >= area.y
            && self.y < area.y.saturating_add(area.height)
    }
}

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_click` - Convert input to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component and remember clickable regions
pub trait Component {
    /// Initialize the component
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Translate a left click at `at` into an Action
    ///
    /// Regions come from the previous `draw`; before the first draw there
    /// is nothing to hit.
    fn handle_click(&mut self, at: Point) -> Result<Option<Action>> {
        let _ = at;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
