pub mod commands;
pub mod element_id;
pub mod theme;
pub mod types;

pub use commands::{ScrollBehavior, StyleProperty, UiCommand};
pub use element_id::ElementId;
pub use theme::{StyleToken, StyleValue};
pub use types::{Margins, Rect, ViewportSize};
