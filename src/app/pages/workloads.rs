use dioxus::prelude::*;

/// Placeholder mount target for the workloads route.
#[component]
pub fn Workloads() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Workloads" }
            p { class: "c-page__hint", "Scheduled jobs will be listed here." }
        }
    }
}
