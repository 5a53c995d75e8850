pub mod icon;

pub use icon::NavGlyph;
