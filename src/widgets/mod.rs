//! State machines for the page chrome drawn over the backdrop.
//!
//! These are pure: they take clicks, key presses and scroll positions and
//! report what the host page should show. Nothing here touches the window
//! or the GPU.
//!
//! ```ignore
//! let mut menu = NavMenu::new();
//! menu.handle(ClickTarget::MenuButton);
//! assert_eq!(menu.icon(), "✕");
//! ```

mod anchor;
mod nav;
mod scroll;
mod select;

pub use anchor::{follow_anchor, AnchorClick, ScrollBlock, ScrollIntoView};
pub use nav::{ClickTarget, NavMenu, MENU_OPEN_CLASS};
pub use scroll::{ScrollButton, ScrollMetrics, NEAR_BOTTOM_THRESHOLD};
pub use select::CustomSelect;
