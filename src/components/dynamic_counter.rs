//! Counter panel with increment and decrement buttons
//!
//! Seeded once from the caller's initial value. After that the count only
//! moves through [`DynamicCounter::increment`] and [`DynamicCounter::decrement`].

use crate::dom::{Action, Node, Tag};
use crate::state::CounterState;
use crate::traits::{Component, ComponentId, Handled, Interactive};

pub struct DynamicCounter {
    state: CounterState,
}

impl DynamicCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            state: CounterState::new(initial),
        }
    }

    pub fn count(&self) -> i64 {
        self.state.get()
    }

    /// `count := count + 1`, returning the new count
    pub fn increment(&mut self) -> i64 {
        let count = self.state.step(1);
        tracing::debug!(count, "dynamic counter incremented");
        count
    }

    /// `count := count - 1`, returning the new count
    pub fn decrement(&mut self) -> i64 {
        let count = self.state.step(-1);
        tracing::debug!(count, "dynamic counter decremented");
        count
    }
}

impl Component for DynamicCounter {
    fn id(&self) -> ComponentId {
        ComponentId::DynamicCounter
    }

    fn render(&self) -> Node {
        Node::element(Tag::Div).children([
            Node::with_text(Tag::H2, "Example Dynamic Component"),
            Node::with_text(Tag::H3, "Counter"),
            Node::with_text(Tag::Span, self.count().to_string()).class("number"),
            Node::br(),
            Node::button("Increment", Action::Increment),
            Node::button("Decrement", Action::Decrement),
        ])
    }
}

impl Interactive for DynamicCounter {
    fn handle_action(&mut self, action: Action) -> Handled {
        match action {
            Action::Increment => {
                self.increment();
                Handled::Yes
            }
            Action::Decrement => {
                self.decrement();
                Handled::Yes
            }
            Action::Click => Handled::No,
        }
    }
}
