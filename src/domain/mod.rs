pub mod nav;

pub use nav::{is_active, NavEntry, NavIcon, NavModel};
