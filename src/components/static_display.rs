//! User-info panel
//!
//! A pure function of the [`UserRecord`] it is given. Holds no state of its
//! own, so swapping the record is the only way its output changes.

use crate::dom::{Action, Node, Tag};
use crate::traits::{Component, ComponentId, Handled, Interactive};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// External data shown by the panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub date_of_birth: NaiveDate,
}

impl UserRecord {
    /// Sample record used when no profile is configured
    pub fn sample(date_of_birth: NaiveDate) -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 26,
            address: "87 Summer St, Boston, MA 02110".to_string(),
            date_of_birth,
        }
    }
}

/// Locale-independent date string: `Mon Oct 19 2026`
///
/// The year is written bare at any width (`Sat Jan 01 10000`); chrono's `%Y`
/// would prefix years past 9999 with `+`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {:04}", date.format("%a %b %d"), date.year())
}

pub struct StaticDisplay {
    record: UserRecord,
}

impl StaticDisplay {
    pub fn new(record: UserRecord) -> Self {
        Self { record }
    }

}

impl Component for StaticDisplay {
    fn id(&self) -> ComponentId {
        ComponentId::StaticDisplay
    }

    fn render(&self) -> Node {
        let r = &self.record;
        Node::element(Tag::Div).children([
            Node::with_text(Tag::H2, "Example Static Component"),
            Node::with_text(Tag::H3, "User Data"),
            Node::text("Name: "),
            Node::with_text(Tag::Strong, r.name.clone()),
            Node::br(),
            Node::text("Age "),
            Node::with_text(Tag::Strong, format!("{} years", r.age)),
            Node::br(),
            Node::text("Birth place: "),
            Node::with_text(Tag::Strong, r.address.clone()),
            Node::br(),
            Node::text("Birth date: "),
            Node::with_text(Tag::Strong, format_date(r.date_of_birth)),
        ])
    }
}

impl Interactive for StaticDisplay {
    fn handle_action(&mut self, _action: Action) -> Handled {
        Handled::No
    }

    fn focusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_sample_user() {
        let today = chrono::Local::now().date_naive();
        let tree = StaticDisplay::new(UserRecord::sample(today)).render();

        assert!(tree.contains_text("John Doe"));
        assert!(tree.contains_text("26 years"));
        assert!(tree.contains_text("87 Summer St, Boston, MA 02110"));
        assert!(tree.contains_text(&format_date(today)));
    }

    #[test]
    fn date_is_day_month_day_year() {
        assert_eq!(format_date(date(2026, 10, 19)), "Mon Oct 19 2026");
        assert_eq!(format_date(date(1999, 1, 5)), "Tue Jan 05 1999");
    }

    #[test]
    fn five_digit_years_have_no_sign() {
        assert_eq!(format_date(date(9999, 12, 31)), "Fri Dec 31 9999");
        assert_eq!(format_date(date(10000, 1, 1)), "Sat Jan 01 10000");
        assert_eq!(format_date(date(54321, 6, 15)).rsplit(' ').next(), Some("54321"));
    }

    #[test]
    fn headings_from_layout() {
        let tree = StaticDisplay::new(UserRecord::sample(date(2000, 2, 29))).render();
        assert!(tree.contains_text("Example Static Component"));
        assert!(tree.contains_text("User Data"));
        assert!(tree.clickables().is_empty());
    }

    #[test]
    fn output_follows_the_record() {
        let first = UserRecord::sample(date(2000, 1, 1));
        let second = UserRecord {
            name: "Jane Roe".to_string(),
            age: 0,
            address: String::new(),
            date_of_birth: date(1970, 1, 1),
        };
        assert!(StaticDisplay::new(first).render().contains_text("John Doe"));
        let tree = StaticDisplay::new(second).render();

        assert!(tree.contains_text("Jane Roe"));
        assert!(tree.contains_text("0 years"));
        assert!(tree.contains_text("Thu Jan 01 1970"));
        assert!(!tree.contains_text("John Doe"));
        assert!(!tree.contains_text("26 years"));
    }

    #[test]
    fn ignores_actions() {
        let mut panel = StaticDisplay::new(UserRecord::sample(date(2000, 1, 1)));
        let before = panel.render();
        assert_eq!(panel.handle_action(Action::Click), Handled::No);
        assert_eq!(panel.render(), before);
        assert!(!panel.focusable());
    }

    proptest! {
        #[test]
        fn every_field_is_shown_verbatim(
            name in "[A-Za-z][A-Za-z .'-]{0,30}",
            age in any::<u32>(),
            address in "[0-9A-Za-z][0-9A-Za-z ,.]{0,40}",
            days in 0i64..3_300_000,
        ) {
            let dob = date(1900, 1, 1) + chrono::Duration::days(days);
            let record = UserRecord { name: name.clone(), age, address: address.clone(), date_of_birth: dob };
            let tree = StaticDisplay::new(record).render();

            let years = format!("{} years", age);
            let shown_date = format_date(dob);

            prop_assert!(tree.contains_text(&name));
            prop_assert!(tree.contains_text(&years));
            prop_assert!(tree.contains_text(&address));
            prop_assert!(tree.contains_text(&shown_date));
            prop_assert!(!shown_date.contains('+'));
        }
    }
}
