//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// How component panels are arranged: side by side only when wide
    pub fn panel_direction(&self) -> Direction {
        if self.at_least(Breakpoint::Wide) {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(400), Breakpoint::Wide);
    }

    #[test]
    fn panels_stack_until_wide() {
        assert_eq!(
            Breakpoint::Normal.panel_direction(),
            Direction::Vertical
        );
        assert_eq!(
            Breakpoint::Wide.panel_direction(),
            Direction::Horizontal
        );
        assert!(Breakpoint::Wide.at_least(Breakpoint::Compact));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
        assert!(Breakpoint::Normal.at_least(Breakpoint::Normal));
    }
}
