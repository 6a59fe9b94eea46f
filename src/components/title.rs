//! Page heading

use crate::dom::{Action, Node, Tag};
use crate::traits::{Component, ComponentId, Handled, Interactive};

pub struct Title {
    text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for Title {
    fn id(&self) -> ComponentId {
        ComponentId::Title
    }

    fn render(&self) -> Node {
        Node::with_text(Tag::H1, self.text.clone())
    }
}

impl Interactive for Title {
    fn handle_action(&mut self, _action: Action) -> Handled {
        Handled::No
    }

    fn focusable(&self) -> bool {
        false
    }
}
