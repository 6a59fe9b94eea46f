// Components module - terminal building blocks
//
// Shell components are rendered around the page:
// - Title bar: page heading
// - Status bar: uptime, events, focus, key hints
// - Logs panel: recent system log entries
//
// Page components are drawn through `panel`, which flows each mounted
// component's document tree with `node_view`.

pub mod logs_panel;
pub mod node_view;
pub mod panel;
pub mod status_bar;
pub mod title_bar;

pub use panel::HitRegion;
