use dioxus::prelude::*;

/// Placeholder mount target for the dashboard route. The real dashboard
/// lives outside the shell's scope.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Dashboard" }
            p { class: "c-page__hint", "Cluster overview will render here." }
        }
    }
}
