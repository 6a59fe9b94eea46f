// UI rendering - called on every frame
//
// Shell layout, top to bottom:
//   title bar │ component panels │ system logs │ status bar
//
// Component panels sit side by side on wide terminals and stack otherwise.
// Drawing also refreshes the app's hit regions so the next mouse click is
// matched against what is actually on screen.

use super::app::App;
use super::components::{logs_panel, panel, status_bar, title_bar};
use super::layout::Breakpoint;
use crate::traits::ComponentId;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the system logs strip (including borders)
const LOGS_HEIGHT: u16 = 7;

/// Main UI render function
pub fn draw(f: &mut Frame, app: &mut App) {
    f.render_widget(Block::default().style(app.theme.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(LOGS_HEIGHT),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    // Component panels (the title already has its own bar)
    let panels: Vec<_> = app
        .page
        .panels()
        .filter(|(id, _)| *id != ComponentId::Title)
        .collect();

    let direction = Breakpoint::from_width(chunks[1].width).panel_direction();
    let areas = Layout::default()
        .direction(direction)
        .constraints(vec![
            Constraint::Ratio(1, panels.len().max(1) as u32);
            panels.len()
        ])
        .split(chunks[1]);

    let mut hit_regions = Vec::new();
    let mut focus_offset = 0;
    for ((id, tree), area) in panels.iter().zip(areas.iter()) {
        let regions = panel::render(f, *area, *id, tree, &app.theme, app.focus, focus_offset);
        focus_offset += tree.clickables().len();
        hit_regions.extend(regions);
    }
    app.hit_regions = hit_regions;

    let visible_logs = usize::from(LOGS_HEIGHT.saturating_sub(2));
    let entries = app.log_buffer.tail(visible_logs);
    logs_panel::render(f, chunks[2], &entries, &app.theme);

    status_bar::render(f, chunks[3], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::UserRecord;
    use crate::dom::Action;
    use crate::logging::LogBuffer;
    use crate::page::{Page, PageProps};
    use crate::tui::theme::Theme;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn test_app(initial_count: i64) -> App {
        let page = Page::showcase(PageProps {
            title: "Hello, Welcome".to_string(),
            user: UserRecord::sample(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
            initial_count,
        });
        App::new(page, Theme::auto(), LogBuffer::new())
    }

    fn screen(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen(terminal.backend().buffer())
    }

    #[test]
    fn wide_screen_shows_every_panel() {
        let mut app = test_app(5);
        let text = draw_to_string(&mut app, 120, 30);

        assert!(text.contains("Hello, Welcome"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("26 years"));
        assert!(text.contains("Mon Oct 19 2026"));
        assert!(text.contains("[ Increment ]"));
        assert!(text.contains("This button was clicked 0 times"));
        assert!(text.contains("System Logs"));
    }

    #[test]
    fn draw_reflects_state_after_transition() {
        let mut app = test_app(5);
        draw_to_string(&mut app, 120, 30);

        app.dispatch(ComponentId::ClickCounter, Action::Click);
        let text = draw_to_string(&mut app, 120, 30);
        assert!(text.contains("This button was clicked 1 times"));
    }

    #[test]
    fn hit_regions_match_drawn_buttons() {
        let mut app = test_app(5);
        draw_to_string(&mut app, 120, 30);

        let labels: Vec<_> = app.hit_regions.iter().map(|r| r.action).collect();
        assert_eq!(
            labels,
            vec![Action::Increment, Action::Decrement, Action::Click]
        );

        // Clicking inside the drawn Decrement button lowers the count
        let region = app.hit_regions[1];
        app.click_at(region.rect.x, region.rect.y);
        let text = draw_to_string(&mut app, 120, 30);
        assert!(app
            .page
            .tree(ComponentId::DynamicCounter)
            .unwrap()
            .contains_text("4"));
        assert_eq!(app.focus, 1);
        assert!(text.contains("events: 1"));
    }

    fn status_line(text: &str) -> &str {
        text.lines().last().unwrap_or_default()
    }

    #[test]
    fn status_bar_sheds_detail_as_width_shrinks() {
        let mut app = test_app(5);

        let wide = draw_to_string(&mut app, 120, 30);
        assert!(status_line(&wide).contains("focus: Dynamic › Increment"));
        assert!(status_line(&wide).contains("Tab:focus"));

        let normal = draw_to_string(&mut app, 80, 60);
        assert!(status_line(&normal).contains("focus: Dynamic › Increment"));
        assert!(!status_line(&normal).contains("Tab:focus"));

        let compact = draw_to_string(&mut app, 50, 60);
        assert!(status_line(&compact).contains("events: 0"));
        assert!(!status_line(&compact).contains("focus:"));
    }

    #[test]
    fn narrow_screen_stacks_panels() {
        let mut app = test_app(5);
        draw_to_string(&mut app, 80, 60);

        let rows: Vec<u16> = app.hit_regions.iter().map(|r| r.rect.y).collect();
        // Dynamic counter buttons share a row; the click target is below them
        assert_eq!(rows[0], rows[1]);
        assert!(rows[2] > rows[1]);
    }
}
