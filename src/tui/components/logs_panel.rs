//! Logs strip
//!
//! Shows the most recent entries from the in-memory log buffer, newest at
//! the bottom. Read-only: the buffer is shared with the tracing layer.

use crate::logging::LogEntry;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One display line for a log entry, tagged with the emitting module
pub fn format_log_entry(entry: &LogEntry) -> String {
    let module = entry
        .target
        .strip_prefix("showcase::")
        .unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(theme.log_style(entry.level)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_line_format() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 7).unwrap(),
            level: LogLevel::Info,
            target: "showcase::page".to_string(),
            message: "dispatched".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[09:05:07] INFO  page: dispatched");

        let root = LogEntry {
            target: "showcase".to_string(),
            ..entry
        };
        assert_eq!(format_log_entry(&root), "[09:05:07] INFO  showcase: dispatched");
    }
}
