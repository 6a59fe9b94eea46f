//! Click-to-count widget
//!
//! The click handler is a closure over the count it was bound with. It is
//! memoized with that count as the key, so the handler is rebuilt every time
//! the count moves and a click never adds to an outdated value.

use crate::dom::{Action, Node, Tag};
use crate::state::{CounterState, Memo};
use crate::traits::{Component, ComponentId, Handled, Interactive};

/// Handler computing the next count from the count captured at bind time
pub type ClickHandler = Box<dyn Fn() -> i64>;

/// Bind a handler to `count`
fn bind(count: i64) -> ClickHandler {
    Box::new(move || count.wrapping_add(1))
}

pub struct ClickCounter {
    state: CounterState,
    on_click: Memo<i64, ClickHandler>,
}

impl ClickCounter {
    pub fn new() -> Self {
        let state = CounterState::default();
        Self {
            on_click: Memo::new(state.get(), bind),
            state,
        }
    }

    pub fn count(&self) -> i64 {
        self.state.get()
    }

    /// Count the current handler was bound with
    pub fn bound_count(&self) -> i64 {
        self.on_click.key()
    }

    /// Handle one click, returning the new count
    pub fn click(&mut self) -> i64 {
        let current = self.state.get();
        let next = (self.on_click.get(current, bind))();
        let count = self.state.set(next);
        // Rebind right away so back-to-back clicks each see the fresh count
        self.on_click.get(count, bind);
        tracing::debug!(
            count,
            bound = self.bound_count(),
            rebinds = self.on_click.rebuilds(),
            "click counted"
        );
        count
    }
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ClickCounter {
    fn id(&self) -> ComponentId {
        ComponentId::ClickCounter
    }

    fn render(&self) -> Node {
        Node::element(Tag::Fragment).children([
            Node::with_text(Tag::Div, "Click me !")
                .class("button")
                .on_click(Action::Click),
            Node::with_text(
                Tag::Div,
                format!("This button was clicked {} times", self.count()),
            )
            .class("label"),
        ])
    }
}

impl Interactive for ClickCounter {
    fn handle_action(&mut self, action: Action) -> Handled {
        match action {
            Action::Click => {
                self.click();
                Handled::Yes
            }
            Action::Increment | Action::Decrement => Handled::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn status(counter: &ClickCounter) -> String {
        let Node::Element { children, .. } = counter.render() else {
            panic!("expected element root");
        };
        children
            .iter()
            .find(|n| matches!(n, Node::Element { class: Some("label"), .. }))
            .map(Node::text_content)
            .expect("status line")
    }

    #[test]
    fn starts_at_zero() {
        let counter = ClickCounter::new();
        assert_eq!(status(&counter), "This button was clicked 0 times");
        assert!(status(&counter).contains("clicked 0 times"));
    }

    #[test]
    fn each_click_shows_next_count() {
        let mut counter = ClickCounter::new();

        counter.click();
        assert!(status(&counter).contains("clicked 1 times"));

        counter.click();
        assert!(status(&counter).contains("clicked 2 times"));
    }

    #[test]
    fn rapid_clicks_before_render_are_all_counted() {
        let mut counter = ClickCounter::new();
        for _ in 0..5 {
            counter.click();
        }
        assert_eq!(counter.count(), 5);
        assert_eq!(status(&counter), "This button was clicked 5 times");
    }

    #[test]
    fn handler_tracks_current_count() {
        let mut counter = ClickCounter::new();
        assert_eq!(counter.bound_count(), 0);
        counter.click();
        counter.click();
        counter.click();
        assert_eq!(counter.bound_count(), 3);
        assert_eq!(counter.bound_count(), counter.count());
    }

    #[test]
    fn stale_handler_is_rebound_when_key_moves() {
        // A handler captured at 0 would keep answering 1 forever
        let mut memo = Memo::new(0, bind);
        assert_eq!((memo.get(0, bind))(), 1);
        assert_eq!((memo.get(3, bind))(), 4);
        assert_eq!(memo.rebuilds(), 1);
    }

    #[test]
    fn clicking_the_rendered_label() {
        let mut counter = ClickCounter::new();
        let action = counter.render().find_clickable("Click me !").unwrap();
        assert_eq!(action, Action::Click);
        assert_eq!(counter.handle_action(action), Handled::Yes);
        assert_eq!(counter.handle_action(Action::Increment), Handled::No);
        assert_eq!(counter.count(), 1);
    }

    proptest! {
        #[test]
        fn n_clicks_report_n(n in 0usize..200) {
            let mut counter = ClickCounter::new();
            for _ in 0..n {
                counter.click();
            }
            let expected = format!("This button was clicked {} times", n);
            prop_assert_eq!(status(&counter), expected);
        }
    }
}
