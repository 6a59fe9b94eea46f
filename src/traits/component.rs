//! Core component trait - the foundation of the UI system
//!
//! Every display unit implements `Component`.
//! This trait provides identity and rendering capability.

use crate::dom::Node;

/// Unique identifier for a mounted component
///
/// Used for:
/// - Event routing (which component receives an action)
/// - Per-component render bookkeeping on the page
/// - Panel titles in the terminal renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Page heading (non-interactive)
    Title,
    /// User-info panel (non-interactive)
    StaticDisplay,
    /// Counter with increment/decrement buttons
    DynamicCounter,
    /// Click-to-count widget
    ClickCounter,
}

impl ComponentId {
    /// Display name for panel borders and logs
    pub fn name(&self) -> &'static str {
        match self {
            ComponentId::Title => "Title",
            ComponentId::StaticDisplay => "Static",
            ComponentId::DynamicCounter => "Dynamic",
            ComponentId::ClickCounter => "Click Counter",
        }
    }
}

/// Base trait for all display components
///
/// A component turns its current inputs and state into a [`Node`] tree.
/// Rendering is pure: calling `render` twice without a transition in
/// between yields equal trees.
///
/// # Example
///
/// ```ignore
/// struct Banner {
///     text: String,
/// }
///
/// impl Component for Banner {
///     fn id(&self) -> ComponentId {
///         ComponentId::Title
///     }
///
///     fn render(&self) -> Node {
///         Node::with_text(Tag::H1, self.text.clone())
///     }
/// }
/// ```
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Produce the document tree for the current state
    fn render(&self) -> Node;
}
