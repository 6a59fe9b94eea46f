//! Document tree → terminal lines
//!
//! Flows a [`Node`] tree into ratatui lines the way a browser flows HTML:
//! block elements (div, headings) sit on their own lines, inline elements
//! (text, span, strong, buttons) run together, `<br>` ends the line.
//!
//! While flowing, every clickable element records where it landed so the
//! event loop can map a mouse click back to the element's action.

use crate::dom::{Action, Node, Tag};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Where a clickable element was placed, relative to the text origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub line: u16,
    pub col: u16,
    pub width: u16,
    /// Position among this tree's clickables, in document order
    pub index: usize,
    pub action: Action,
}

impl Hit {
    /// Screen rectangle once the text is drawn starting at `origin`
    pub fn rect(&self, origin: Rect) -> Rect {
        Rect::new(
            origin.x.saturating_add(self.col),
            origin.y.saturating_add(self.line),
            self.width,
            1,
        )
        .intersection(origin)
    }
}

/// Flowed lines plus clickable placements
pub struct NodeLayout {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<Hit>,
}

/// Flow `node` into lines, highlighting the clickable at `focused`
pub fn layout(node: &Node, theme: &Theme, focused: Option<usize>) -> NodeLayout {
    let mut flow = Flow {
        theme,
        focused,
        lines: Vec::new(),
        current: Vec::new(),
        col: 0,
        hits: Vec::new(),
    };
    flow.walk(node, Style::default());
    flow.break_line();

    NodeLayout {
        lines: flow.lines,
        hits: flow.hits,
    }
}

/// Label as drawn for a clickable element
pub fn button_label(text: &str) -> String {
    format!("[ {} ]", text)
}

struct Flow<'t> {
    theme: &'t Theme,
    focused: Option<usize>,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    col: usize,
    hits: Vec<Hit>,
}

impl Flow<'_> {
    /// End the current line if it has content
    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.new_line();
        }
    }

    /// End the current line unconditionally
    fn new_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
        self.col = 0;
    }

    fn push(&mut self, text: String, style: Style) {
        self.col += text.width();
        self.current.push(Span::styled(text, style));
    }

    fn walk(&mut self, node: &Node, inherited: Style) {
        let (tag, class, on_click, children) = match node {
            Node::Text { text } => {
                self.push(text.clone(), inherited);
                return;
            }
            Node::Element {
                tag,
                class,
                on_click,
                children,
            } => (*tag, *class, *on_click, children),
        };

        if tag == Tag::Br {
            self.new_line();
            return;
        }

        if tag.is_block() {
            self.break_line();
        }

        if let Some(action) = on_click {
            self.clickable(node, action);
        } else {
            let style = match tag {
                Tag::H1 | Tag::H2 | Tag::H3 => self.theme.heading_style(),
                Tag::Strong => inherited
                    .fg(self.theme.emphasis)
                    .add_modifier(Modifier::BOLD),
                Tag::Span if class == Some("number") => Style::default()
                    .fg(self.theme.number)
                    .add_modifier(Modifier::BOLD),
                _ => inherited,
            };
            for child in children {
                self.walk(child, style);
            }
        }

        if tag.is_block() {
            self.break_line();
        }
    }

    fn clickable(&mut self, node: &Node, action: Action) {
        let index = self.hits.len();
        let label = button_label(&node.text_content());

        self.hits.push(Hit {
            line: u16::try_from(self.lines.len()).unwrap_or(u16::MAX),
            col: u16::try_from(self.col).unwrap_or(u16::MAX),
            width: u16::try_from(label.width()).unwrap_or(u16::MAX),
            index,
            action,
        });

        let style = self.theme.button_style(self.focused == Some(index));
        self.push(label, style);
        self.push(" ".to_string(), Style::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ClickCounter, DynamicCounter};
    use crate::traits::Component;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn counter_flows_into_lines() {
        let theme = Theme::auto();
        let out = layout(&DynamicCounter::new(7).render(), &theme, None);
        let text: Vec<String> = out.lines.iter().map(plain).collect();

        assert_eq!(
            text,
            vec![
                "Example Dynamic Component".to_string(),
                "Counter".to_string(),
                "7".to_string(),
                "[ Increment ] [ Decrement ] ".to_string(),
            ]
        );
    }

    #[test]
    fn hits_record_button_positions() {
        let theme = Theme::auto();
        let out = layout(&DynamicCounter::new(7).render(), &theme, None);

        assert_eq!(out.hits.len(), 2);
        assert_eq!(
            out.hits[0],
            Hit {
                line: 3,
                col: 0,
                width: 13,
                index: 0,
                action: Action::Increment
            }
        );
        assert_eq!(out.hits[1].col, 14);
        assert_eq!(out.hits[1].action, Action::Decrement);
    }

    #[test]
    fn block_clickable_gets_its_own_line() {
        let theme = Theme::auto();
        let out = layout(&ClickCounter::new().render(), &theme, Some(0));
        let text: Vec<String> = out.lines.iter().map(plain).collect();

        assert_eq!(text[0], "[ Click me ! ] ");
        assert_eq!(text[1], "This button was clicked 0 times");
        assert_eq!(out.lines[0].spans[0].style, theme.button_style(true));
    }

    #[test]
    fn hit_rect_is_clipped_to_origin() {
        let hit = Hit {
            line: 0,
            col: 8,
            width: 13,
            index: 0,
            action: Action::Click,
        };
        let rect = hit.rect(Rect::new(2, 3, 12, 5));
        assert_eq!(rect, Rect::new(10, 3, 4, 1));
    }
}
