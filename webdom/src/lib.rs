pub mod element;
pub mod render;
pub mod types;

pub use element::{Content, Element, Scope, Tag};
pub use render::to_html;
pub use types::StyleProps;
