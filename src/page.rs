// Page - the mounting root
//
// Owns every mounted component together with the tree it last rendered.
// An action is routed to exactly one component; if that component reports a
// state change, only its tree is rendered again before `dispatch` returns.
// The next event therefore always sees up-to-date output.

use crate::components::{ClickCounter, DynamicCounter, StaticDisplay, Title, UserRecord};
use crate::dom::{Action, Node, Tag};
use crate::traits::{ComponentId, Handled, Interactive};
use anyhow::{bail, Result};

/// Inputs the showcase page is built from
#[derive(Debug, Clone)]
pub struct PageProps {
    pub title: String,
    pub user: UserRecord,
    pub initial_count: i64,
}

/// A component plus its most recent render
struct Mounted {
    component: Box<dyn Interactive>,
    tree: Node,
    renders: usize,
}

impl Mounted {
    fn new(component: Box<dyn Interactive>) -> Self {
        let tree = component.render();
        Self {
            component,
            tree,
            renders: 1,
        }
    }

    fn rerender(&mut self) {
        self.tree = self.component.render();
        self.renders += 1;
    }
}

/// A clickable element currently on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clickable {
    pub owner: ComponentId,
    pub label: String,
    pub action: Action,
}

#[derive(Default)]
pub struct Page {
    mounted: Vec<Mounted>,
    dispatched: u64,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard page: title, user panel, dynamic counter, click counter
    pub fn showcase(props: PageProps) -> Self {
        let mut page = Self::new();
        page.mount(Box::new(Title::new(props.title)));
        page.mount(Box::new(StaticDisplay::new(props.user)));
        page.mount(Box::new(DynamicCounter::new(props.initial_count)));
        page.mount(Box::new(ClickCounter::new()));
        page
    }

    /// Mount a component and render it once
    pub fn mount(&mut self, component: Box<dyn Interactive>) {
        tracing::debug!(component = component.id().name(), "mounted");
        self.mounted.push(Mounted::new(component));
    }

    /// Deliver an action to one component
    ///
    /// Re-renders that component when it handled the action.
    pub fn dispatch(&mut self, id: ComponentId, action: Action) -> Handled {
        let Some(mounted) = self.mounted.iter_mut().find(|m| m.component.id() == id) else {
            return Handled::No;
        };

        let handled = mounted.component.handle_action(action);
        if handled.was_handled() {
            mounted.rerender();
            self.dispatched += 1;
            tracing::debug!(component = id.name(), ?action, "dispatched");
        }
        handled
    }

    /// Click the first element labelled `label`, in document order
    pub fn click(&mut self, label: &str) -> Result<ComponentId> {
        let Some(target) = self.clickables().into_iter().find(|c| c.label == label) else {
            bail!("no clickable element labelled {:?}", label);
        };
        self.dispatch(target.owner, target.action);
        Ok(target.owner)
    }

    /// Every clickable element across all focusable components
    pub fn clickables(&self) -> Vec<Clickable> {
        self.mounted
            .iter()
            .filter(|m| m.component.focusable())
            .flat_map(|m| {
                let owner = m.component.id();
                m.tree
                    .clickables()
                    .into_iter()
                    .map(move |(label, action)| Clickable {
                        owner,
                        label,
                        action,
                    })
            })
            .collect()
    }

    /// Last rendered tree of a component
    pub fn tree(&self, id: ComponentId) -> Option<&Node> {
        self.mounted
            .iter()
            .find(|m| m.component.id() == id)
            .map(|m| &m.tree)
    }

    /// Mounted components with their trees, in mount order
    pub fn panels(&self) -> impl Iterator<Item = (ComponentId, &Node)> {
        self.mounted.iter().map(|m| (m.component.id(), &m.tree))
    }

    /// Whole page as one tree
    pub fn document(&self) -> Node {
        Node::element(Tag::Div).children(self.mounted.iter().map(|m| m.tree.clone()))
    }

    /// How many times a component has been rendered (mount included)
    #[cfg(test)]
    pub fn render_count(&self, id: ComponentId) -> usize {
        self.mounted
            .iter()
            .find(|m| m.component.id() == id)
            .map_or(0, |m| m.renders)
    }

    /// Number of actions that changed state
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Component;
    use chrono::NaiveDate;

    fn page(initial_count: i64) -> Page {
        Page::showcase(PageProps {
            title: "Hello".to_string(),
            user: UserRecord::sample(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
            initial_count,
        })
    }

    fn dynamic_count(page: &Page) -> String {
        let tree = page.tree(ComponentId::DynamicCounter).unwrap();
        let Node::Element { children, .. } = tree else {
            panic!("expected element");
        };
        children
            .iter()
            .find(|n| matches!(n, Node::Element { class: Some("number"), .. }))
            .map(Node::text_content)
            .unwrap()
    }

    #[test]
    fn mounts_all_components_once() {
        let page = page(5);
        let ids: Vec<_> = page.panels().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                ComponentId::Title,
                ComponentId::StaticDisplay,
                ComponentId::DynamicCounter,
                ComponentId::ClickCounter,
            ]
        );
        for id in ids {
            assert_eq!(page.render_count(id), 1);
        }
        assert_eq!(dynamic_count(&page), "5");
    }

    #[test]
    fn dynamic_counter_scenario() {
        let mut page = page(0);
        assert_eq!(dynamic_count(&page), "0");

        page.click("Increment").unwrap();
        assert_eq!(dynamic_count(&page), "1");

        page.click("Decrement").unwrap();
        assert_eq!(dynamic_count(&page), "0");
    }

    #[test]
    fn decrement_below_zero() {
        let mut page = page(5);
        for _ in 0..6 {
            page.click("Decrement").unwrap();
        }
        assert_eq!(dynamic_count(&page), "-1");
    }

    #[test]
    fn click_counter_scenario() {
        let mut page = page(5);
        let doc = page.document();
        assert!(doc.contains_text("This button was clicked 0 times"));

        assert_eq!(page.click("Click me !").unwrap(), ComponentId::ClickCounter);
        assert!(page
            .document()
            .contains_text("This button was clicked 1 times"));

        page.click("Click me !").unwrap();
        assert!(page
            .document()
            .contains_text("This button was clicked 2 times"));
    }

    #[test]
    fn only_target_component_rerenders() {
        let mut page = page(5);
        page.click("Increment").unwrap();
        page.click("Click me !").unwrap();
        page.click("Click me !").unwrap();

        assert_eq!(page.render_count(ComponentId::Title), 1);
        assert_eq!(page.render_count(ComponentId::StaticDisplay), 1);
        assert_eq!(page.render_count(ComponentId::DynamicCounter), 2);
        assert_eq!(page.render_count(ComponentId::ClickCounter), 3);
        assert_eq!(page.dispatched(), 3);
    }

    #[test]
    fn unhandled_action_does_not_rerender() {
        let mut page = page(5);
        assert_eq!(
            page.dispatch(ComponentId::StaticDisplay, Action::Click),
            Handled::No
        );
        assert_eq!(
            page.dispatch(ComponentId::ClickCounter, Action::Decrement),
            Handled::No
        );
        assert_eq!(page.render_count(ComponentId::StaticDisplay), 1);
        assert_eq!(page.render_count(ComponentId::ClickCounter), 1);
        assert_eq!(page.dispatched(), 0);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let mut page = page(5);
        let err = page.click("Reset").unwrap_err();
        assert!(err.to_string().contains("Reset"));
    }

    #[test]
    fn clickables_in_page_order() {
        let page = page(5);
        let labels: Vec<_> = page
            .clickables()
            .into_iter()
            .map(|c| (c.owner, c.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                (ComponentId::DynamicCounter, "Increment".to_string()),
                (ComponentId::DynamicCounter, "Decrement".to_string()),
                (ComponentId::ClickCounter, "Click me !".to_string()),
            ]
        );
    }

    /// Display-only banner that still draws a button
    struct Banner;

    impl Component for Banner {
        fn id(&self) -> ComponentId {
            ComponentId::Title
        }

        fn render(&self) -> Node {
            Node::element(Tag::Div).child(Node::button("Go", Action::Click))
        }
    }

    impl Interactive for Banner {
        fn handle_action(&mut self, _action: Action) -> Handled {
            Handled::No
        }

        fn focusable(&self) -> bool {
            false
        }
    }

    #[test]
    fn non_focusable_components_expose_no_clickables() {
        let mut page = Page::new();
        page.mount(Box::new(Banner));
        page.mount(Box::new(ClickCounter::new()));

        let labels: Vec<_> = page.clickables().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Click me !".to_string()]);
        assert!(page.click("Go").is_err());
        assert!(page.document().contains_text("Go"));
    }

    #[test]
    fn document_shows_every_panel() {
        let doc = page(5).document();
        assert!(doc.contains_text("Hello"));
        assert!(doc.contains_text("John Doe"));
        assert!(doc.contains_text("Mon Oct 19 2026"));
        assert!(doc.contains_text("5"));
    }
}
