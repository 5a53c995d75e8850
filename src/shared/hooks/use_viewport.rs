//! Viewport width tracking for the responsive layout switch.
//!
//! The shell is a binary layout: below the breakpoint the navigation panel
//! is a horizontally scrollable top bar, at or above it a full-height left
//! rail. Mode is recomputed from the live width on every resize; there is
//! no hysteresis and no memory of the previous mode.

use dioxus::prelude::*;

use crate::config::LAYOUT_BREAKPOINT_PX;

/// Width assumed when no window is available (server-side render, native
/// shell before first measure). Desktop-sized, so SSR emits the rail.
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// The two presentations of the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Horizontal, scrollable top bar (narrow viewports)
    Bar,
    /// Vertical, full-height left panel (wide viewports)
    Rail,
}

impl LayoutMode {
    /// Classify a viewport width. Pure; same width always yields the
    /// same mode.
    pub fn of_width(width: f64) -> Self {
        if width < LAYOUT_BREAKPOINT_PX {
            LayoutMode::Bar
        } else {
            LayoutMode::Rail
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            LayoutMode::Bar => "c-sidebar--bar",
            LayoutMode::Rail => "c-sidebar--rail",
        }
    }
}

/// Track the viewport width as a signal, updated on every window resize.
pub fn use_viewport_width() -> Signal<f64> {
    let width = use_signal(|| DEFAULT_VIEWPORT_WIDTH);

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        attach_resize_listener(width);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = width;
    });

    width
}

#[cfg(target_arch = "wasm32")]
fn attach_resize_listener(mut width: Signal<f64>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::shared::logging;

    let Some(window) = web_sys::window() else {
        logging::log_viewport_listener_failed();
        return;
    };

    if let Some(w) = measure_width(&window) {
        width.set(w);
    }

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(window) = web_sys::window() {
            if let Some(w) = measure_width(&window) {
                width.set(w);
            }
        }
    });

    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_err()
    {
        logging::log_viewport_listener_failed();
        return;
    }

    // Listener lives as long as the page; the shell is the outermost frame
    on_resize.forget();
}

#[cfg(target_arch = "wasm32")]
fn measure_width(window: &web_sys::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_width_is_bar() {
        assert_eq!(LayoutMode::of_width(375.0), LayoutMode::Bar);
        assert_eq!(LayoutMode::of_width(LAYOUT_BREAKPOINT_PX - 0.1), LayoutMode::Bar);
    }

    #[test]
    fn test_breakpoint_and_above_is_rail() {
        assert_eq!(LayoutMode::of_width(LAYOUT_BREAKPOINT_PX), LayoutMode::Rail);
        assert_eq!(LayoutMode::of_width(1920.0), LayoutMode::Rail);
    }

    #[test]
    fn test_mode_is_pure_function_of_width() {
        // No hysteresis: crossing back and forth lands on the same answers
        for _ in 0..3 {
            assert_eq!(LayoutMode::of_width(500.0), LayoutMode::Bar);
            assert_eq!(LayoutMode::of_width(1000.0), LayoutMode::Rail);
        }
    }

    #[test]
    fn test_mode_classes_are_distinct() {
        assert_ne!(LayoutMode::Bar.class(), LayoutMode::Rail.class());
    }
}
