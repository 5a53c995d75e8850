pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the Green Scheduler App
pub use pages::routes::App;
