// TUI application state
//
// Holds the mounted page plus everything the terminal front end needs on
// top of it: theme, focus position, where clickables were last drawn.

use super::components::HitRegion;
use super::theme::Theme;
use crate::dom::Action;
use crate::logging::LogBuffer;
use crate::page::{Clickable, Page};
use crate::traits::{ComponentId, Handled};
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// The mounted components
    pub page: Page,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the system logs strip
    pub log_buffer: LogBuffer,

    /// Page-wide index of the focused clickable element
    pub focus: usize,

    /// Clickable screen regions from the last draw
    pub hit_regions: Vec<HitRegion>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,
}

impl App {
    pub fn new(page: Page, theme: Theme, log_buffer: LogBuffer) -> Self {
        Self {
            page,
            theme,
            log_buffer,
            focus: 0,
            hit_regions: Vec::new(),
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    /// The clickable element that currently has focus
    pub fn focused_clickable(&self) -> Option<Clickable> {
        self.page.clickables().into_iter().nth(self.focus)
    }

    /// Move focus to the next clickable (wraps around)
    pub fn focus_next(&mut self) {
        let count = self.page.clickables().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Move focus to the previous clickable (wraps around)
    pub fn focus_prev(&mut self) {
        let count = self.page.clickables().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Click the focused element
    pub fn activate_focused(&mut self) -> Handled {
        match self.focused_clickable() {
            Some(target) => self.dispatch(target.owner, target.action),
            None => Handled::No,
        }
    }

    /// Deliver an action to a component; the page re-renders it before returning
    pub fn dispatch(&mut self, owner: ComponentId, action: Action) -> Handled {
        self.page.dispatch(owner, action)
    }

    /// Mouse click at a screen cell; focuses and clicks whatever was drawn there
    pub fn click_at(&mut self, column: u16, row: u16) -> Handled {
        let hit = self
            .hit_regions
            .iter()
            .find(|region| {
                let r = region.rect;
                column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
            })
            .copied();

        match hit {
            Some(region) => {
                self.focus = region.focus_index;
                self.dispatch(region.owner, region.action)
            }
            None => Handled::No,
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
