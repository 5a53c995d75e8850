use dioxus::prelude::*;

use crate::domain::nav::NavIcon;

/// Render a navigation glyph at the requested size.
///
/// Outline-style SVG, stroked with `currentColor` so the surrounding
/// link's text color applies. Each `NavIcon` variant has markup here; a
/// variant without markup degrades to nothing so the label still renders
/// on its own.
#[component]
pub fn NavGlyph(icon: NavIcon, #[props(default = 20)] size: u32) -> Element {
    let strokes = match icon {
        NavIcon::Leaf => rsx! {
            path { d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" }
            path { d: "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" }
        },
        NavIcon::Dashboard => rsx! {
            rect { width: "7", height: "9", x: "3", y: "3", rx: "1" }
            rect { width: "7", height: "5", x: "14", y: "3", rx: "1" }
            rect { width: "7", height: "9", x: "14", y: "12", rx: "1" }
            rect { width: "7", height: "5", x: "3", y: "16", rx: "1" }
        },
        NavIcon::List => rsx! {
            path { d: "M3 6h.01" }
            path { d: "M3 12h.01" }
            path { d: "M3 18h.01" }
            path { d: "M8 6h13" }
            path { d: "M8 12h13" }
            path { d: "M8 18h13" }
        },
        NavIcon::Settings => rsx! {
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
    };

    rsx! {
        svg {
            class: "c-glyph",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {strokes}
        }
    }
}
