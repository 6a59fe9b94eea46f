// Theme support for the TUI
//
// Provides color palettes selected by name from config.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Frame
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Shell
    pub title: Color,
    pub status_bar: Color,

    // Document content
    pub heading: Color,
    pub emphasis: Color,
    pub number: Color,
    pub button: Color,
    pub button_focused_fg: Color,
    pub button_focused_bg: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

impl Theme {
    /// Load theme by name (unknown names fall back to "auto")
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(),
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            status_bar: Color::Green,
            heading: Color::Cyan,
            emphasis: Color::White,
            number: Color::Yellow,
            button: Color::Green,
            button_focused_fg: Color::Black,
            button_focused_bg: Color::Green,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            border_focused: Color::Rgb(0xbd, 0x93, 0xf9),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xbd, 0x93, 0xf9),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            heading: Color::Rgb(0x8b, 0xe9, 0xfd),
            emphasis: Color::Rgb(0xff, 0x79, 0xc6),
            number: Color::Rgb(0xf1, 0xfa, 0x8c),
            button: Color::Rgb(0x50, 0xfa, 0x7b),
            button_focused_fg: Color::Rgb(0x28, 0x2a, 0x36),
            button_focused_bg: Color::Rgb(0x50, 0xfa, 0x7b),
            log_error: Color::Rgb(0xff, 0x55, 0x55),
            log_warn: Color::Rgb(0xff, 0xb8, 0x6c),
            log_info: Color::Rgb(0x8b, 0xe9, 0xfd),
            log_debug: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            border_focused: Color::Rgb(0x88, 0xc0, 0xd0),
            border_type: BorderType::Plain,
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            heading: Color::Rgb(0x81, 0xa1, 0xc1),
            emphasis: Color::Rgb(0xec, 0xef, 0xf4),
            number: Color::Rgb(0xeb, 0xcb, 0x8b),
            button: Color::Rgb(0xa3, 0xbe, 0x8c),
            button_focused_fg: Color::Rgb(0x2e, 0x34, 0x40),
            button_focused_bg: Color::Rgb(0x88, 0xc0, 0xd0),
            log_error: Color::Rgb(0xbf, 0x61, 0x6a),
            log_warn: Color::Rgb(0xd0, 0x87, 0x70),
            log_info: Color::Rgb(0x81, 0xa1, 0xc1),
            log_debug: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border: Color::Rgb(0x66, 0x5c, 0x54),
            border_focused: Color::Rgb(0xfa, 0xbd, 0x2f),
            border_type: BorderType::Thick,
            title: Color::Rgb(0xfa, 0xbd, 0x2f),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            heading: Color::Rgb(0x83, 0xa5, 0x98),
            emphasis: Color::Rgb(0xfe, 0x80, 0x19),
            number: Color::Rgb(0xfa, 0xbd, 0x2f),
            button: Color::Rgb(0xb8, 0xbb, 0x26),
            button_focused_fg: Color::Rgb(0x28, 0x28, 0x28),
            button_focused_bg: Color::Rgb(0xb8, 0xbb, 0x26),
            log_error: Color::Rgb(0xfb, 0x49, 0x34),
            log_warn: Color::Rgb(0xfe, 0x80, 0x19),
            log_info: Color::Rgb(0x83, 0xa5, 0x98),
            log_debug: Color::Rgb(0x92, 0x83, 0x74),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Button style, inverted when focused
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.button_focused_fg)
                .bg(self.button_focused_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.button)
        }
    }

    pub fn log_style(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
        assert_eq!(Theme::by_name("solarized").name, "auto");
    }
}
