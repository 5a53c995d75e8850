// Custom Dioxus hooks
pub mod use_viewport;

pub use use_viewport::{use_viewport_width, LayoutMode};
