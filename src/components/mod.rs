// Components module - the display units mounted on the page
//
// - Title: page heading
// - Static display: user-info panel driven entirely by its record
// - Dynamic counter: owns a count with increment/decrement buttons
// - Click counter: counts clicks through a count-keyed memoized handler
//
// Components are leaves. None of them knows about the others or about the
// renderer that eventually draws their trees.

pub mod click_counter;
pub mod dynamic_counter;
pub mod static_display;
pub mod title;

pub use click_counter::ClickCounter;
pub use dynamic_counter::DynamicCounter;
pub use static_display::{StaticDisplay, UserRecord};
pub use title::Title;
