mod document;
mod range;

pub mod error;
pub mod render;
pub mod session;

pub use document::*;
pub use range::*;
pub use render::{FormBuilder, render_node};
pub use session::{InputEvent, MouseButton, Session};
