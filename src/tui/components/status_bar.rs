// Status bar component
//
// Renders uptime, dispatched event count, the focused element and key hints,
// dropping the trailing parts as the terminal narrows.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: focused element and key hints
/// - Normal: focused element
/// - Compact: uptime and event count only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let breakpoint = Breakpoint::from_width(area.width);

    let mut status_text = format!(" {} │ events: {}", app.uptime(), app.page.dispatched());

    if breakpoint.at_least(Breakpoint::Normal) {
        let focused = app
            .focused_clickable()
            .map(|c| format!("{} › {}", c.owner.name(), c.label))
            .unwrap_or_else(|| "-".to_string());
        status_text.push_str(&format!(" │ focus: {}", focused));
    }

    if breakpoint.at_least(Breakpoint::Wide) {
        status_text.push_str(" │ Tab:focus  Enter:click  +/-:counter  c:click");
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
