use dioxus::prelude::*;

/// Placeholder mount target for the settings route.
#[component]
pub fn Settings() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Settings" }
            p { class: "c-page__hint", "Scheduler preferences will render here." }
        }
    }
}
