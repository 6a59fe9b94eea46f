// Title bar component
//
// Renders the page heading (the Title component's tree) with a key hint.

use crate::tui::app::App;
use crate::traits::ComponentId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let heading = app
        .page
        .tree(ComponentId::Title)
        .map(|tree| tree.text_content())
        .unwrap_or_default();

    let title = Paragraph::new(format!(" {}", heading))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" q:quit ").right_aligned()),
        );

    f.render_widget(title, area);
}
