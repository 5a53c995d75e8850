//! The outermost visual frame: branding, navigation, and the routed
//! content slot. Everything here re-renders as a pure function of
//! (current route, viewport width, navigation model).

use dioxus::prelude::*;

use crate::app::components::NavGlyph;
use crate::app::pages::routes::Route;
use crate::config;
use crate::domain::nav::{is_active, NavEntry, NavIcon, NavModel};
use crate::shared::hooks::{use_viewport_width, LayoutMode};
use crate::shared::logging;
use crate::shared::style::{merge_classes, NavLinkState};

#[component]
pub fn Shell() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/bundle.css");

    // Navigation model comes from app context; fall back to the built-in
    // set rather than panicking, this frame must always render
    let nav = try_consume_context::<NavModel>().unwrap_or_else(config::default_nav);

    let route = use_route::<Route>();
    let current_path = route.to_string();

    let width = use_viewport_width();
    let mode = LayoutMode::of_width(width());

    use_effect(use_reactive!(|current_path| {
        logging::log_route_change(&current_path);
    }));

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-shell",
            // Navigation panel: top bar below the breakpoint, left rail above
            aside { class: merge_classes(&["c-sidebar", mode.class()]),
                div { class: "c-sidebar__brand",
                    span { class: "c-sidebar__brand-icon",
                        NavGlyph { icon: NavIcon::Leaf, size: 24 }
                    }
                    span { class: "c-sidebar__brand-name", {config::BRAND_NAME} }
                }

                nav { class: "c-sidebar__nav",
                    for entry in nav.entries().iter().cloned() {
                        NavItem {
                            key: "{entry.path}",
                            active: is_active(&entry.path, Some(current_path.as_str())),
                            entry,
                        }
                    }
                }
            }

            // Content region: whatever the router selects for the route
            main { class: "c-shell__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// One navigation link. Active state only toggles the style variant; the
/// router owns what clicking does.
#[component]
fn NavItem(entry: NavEntry, active: bool) -> Element {
    let state = NavLinkState::from_active(active);
    let class = merge_classes(&["c-sidebar__nav-item", state.class()]);

    rsx! {
        Link {
            to: entry.path.clone(),
            class: "{class}",
            span { class: "c-sidebar__nav-icon",
                NavGlyph { icon: entry.icon, size: 20 }
            }
            span { class: "c-sidebar__nav-label", "{entry.label}" }
        }
    }
}
