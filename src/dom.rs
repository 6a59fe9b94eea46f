//! Document tree produced by components
//!
//! Components never draw anything themselves. They return a [`Node`] tree
//! describing what should be visible, and a renderer (the terminal UI, the
//! text outline printer, or the JSON exporter) decides how to show it.
//!
//! The test-only lookups at the bottom mirror how a user finds things on
//! screen: by the text they read, and by the buttons they can press.

use serde::Serialize;
use std::fmt::Write as _;

/// Element kinds understood by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Generic block container
    Div,
    /// Page heading
    H1,
    /// Section heading
    H2,
    /// Sub-section heading
    H3,
    /// Inline text container
    Span,
    /// Emphasized inline text
    Strong,
    /// Clickable button
    Button,
    /// Line break
    Br,
    /// Grouping with no visual presence of its own
    Fragment,
}

impl Tag {
    /// Whether the element starts on its own line
    pub fn is_block(self) -> bool {
        matches!(self, Tag::Div | Tag::H1 | Tag::H2 | Tag::H3)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Span => "span",
            Tag::Strong => "strong",
            Tag::Button => "button",
            Tag::Br => "br",
            Tag::Fragment => "fragment",
        }
    }
}

/// Event a clickable element dispatches to the component that rendered it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Add one to a counter
    Increment,
    /// Subtract one from a counter
    Decrement,
    /// Generic click on a click target
    Click,
}

/// A node in the rendered document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element {
        tag: Tag,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        on_click: Option<Action>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

impl Node {
    /// Create an empty element
    pub fn element(tag: Tag) -> Self {
        Node::Element {
            tag,
            class: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Create a text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Shorthand for an element holding a single text child
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        Self::element(tag).child(Self::text(text))
    }

    /// Clickable button with a label
    pub fn button(label: impl Into<String>, action: Action) -> Self {
        Self::with_text(Tag::Button, label).on_click(action)
    }

    /// Line break
    pub fn br() -> Self {
        Self::element(Tag::Br)
    }

    /// Append a child (no-op on text nodes)
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Append several children
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Attach a style class
    pub fn class(mut self, name: &'static str) -> Self {
        if let Node::Element { class, .. } = &mut self {
            *class = Some(name);
        }
        self
    }

    /// Bind a click action
    pub fn on_click(mut self, action: Action) -> Self {
        if let Node::Element { on_click, .. } = &mut self {
            *on_click = Some(action);
        }
        self
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All clickable elements in document order, as (label, action) pairs
    pub fn clickables(&self) -> Vec<(String, Action)> {
        let mut out = Vec::new();
        self.collect_clickables(&mut out);
        out
    }

    fn collect_clickables(&self, out: &mut Vec<(String, Action)>) {
        if let Node::Element {
            on_click, children, ..
        } = self
        {
            if let Some(action) = on_click {
                out.push((self.text_content(), *action));
                return;
            }
            for child in children {
                child.collect_clickables(out);
            }
        }
    }

    /// Indented outline, one element per line
    pub fn to_outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Text { text } => {
                let _ = writeln!(out, "{}{:?}", indent, text);
            }
            Node::Element {
                tag,
                class,
                on_click,
                children,
            } => {
                let _ = write!(out, "{}<{}", indent, tag.as_str());
                if let Some(class) = class {
                    let _ = write!(out, " class={:?}", class);
                }
                if let Some(action) = on_click {
                    let _ = write!(out, " on_click={:?}", action);
                }
                out.push_str(">\n");
                for child in children {
                    child.write_outline(out, depth + 1);
                }
            }
        }
    }
}

// Lookups by what a user reads on screen, for assertions
#[cfg(test)]
impl Node {
    /// Find the deepest node whose full text content equals `needle`
    pub fn find_by_text(&self, needle: &str) -> Option<&Node> {
        if let Node::Element { children, .. } = self {
            if let Some(found) = children.iter().find_map(|c| c.find_by_text(needle)) {
                return Some(found);
            }
        }
        (self.text_content() == needle).then_some(self)
    }

    /// Whether some node displays exactly `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.find_by_text(needle).is_some()
    }

    /// Action bound to the clickable element labelled `label`
    pub fn find_clickable(&self, label: &str) -> Option<Action> {
        self.clickables()
            .into_iter()
            .find(|(text, _)| text == label)
            .map(|(_, action)| action)
    }
}
