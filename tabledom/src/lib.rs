pub mod element;
pub mod event;
pub mod render;
pub mod types;

pub use element::{find_all_by_tag, find_by_tag, find_element, Content, Element};
pub use event::{Event, EventHandler, EventKind, EventResult, Handlers, Key, Modifiers, MouseButton};
pub use render::to_html;
pub use types::*;
