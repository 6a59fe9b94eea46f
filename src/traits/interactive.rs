//! Interactive trait for components that handle click actions
//!
//! The page routes each action to the component whose rendered tree
//! contains the clicked element.

use super::Component;
use crate::dom::Action;

/// Result of handling an action
///
/// Tells the page whether the component changed state and therefore
/// needs a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Action was consumed by the component
    Yes,
    /// Action was not meant for this component
    No,
}

impl Handled {
    /// Check if the action was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that react to actions
///
/// # Event Flow
///
/// ```text
/// click on element (carries an Action)
///    │
///    ▼
/// Page (finds the owning component)
///    │
///    ▼
/// Component::handle_action → Handled::Yes / Handled::No
///    │
///    │ if Yes
///    ▼
/// Page re-renders that component only
/// ```
pub trait Interactive: Component {
    /// Apply an action to the component's state
    ///
    /// Returns `Handled::Yes` when state changed and a render is due.
    fn handle_action(&mut self, action: Action) -> Handled;

    /// Whether this component exposes anything to click
    ///
    /// Default is `true`. Display-only components return `false`.
    fn focusable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_counts_as_handled() {
        assert!(Handled::Yes.was_handled());
        assert!(!Handled::No.was_handled());
    }
}
