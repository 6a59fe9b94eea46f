//! Component panel
//!
//! Draws one mounted component's tree inside a bordered block and reports
//! where its clickable elements ended up on screen.

use super::node_view;
use crate::dom::{Action, Node};
use crate::traits::ComponentId;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A clickable element's screen position after drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub owner: ComponentId,
    pub action: Action,
    /// Page-wide focus index of the element
    pub focus_index: usize,
}

/// Draw a panel; `focus_offset` is the page-wide index of its first clickable
pub fn render(
    f: &mut Frame,
    area: Rect,
    id: ComponentId,
    tree: &Node,
    theme: &Theme,
    focus: usize,
    focus_offset: usize,
) -> Vec<HitRegion> {
    let local_focus = focus.checked_sub(focus_offset);
    let flowed = node_view::layout(tree, theme, local_focus);
    let has_focus = local_focus.is_some_and(|i| i < flowed.hits.len());

    let border_color = if has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", id.name()));
    let inner = block.inner(area);

    f.render_widget(
        Paragraph::new(flowed.lines)
            .style(theme.base_style())
            .block(block),
        area,
    );

    flowed
        .hits
        .iter()
        .map(|hit| HitRegion {
            rect: hit.rect(inner),
            owner: id,
            action: hit.action,
            focus_index: focus_offset + hit.index,
        })
        .filter(|region| !region.rect.is_empty())
        .collect()
}
