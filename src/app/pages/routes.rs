use dioxus::prelude::*;

use crate::app::layouts::Shell;
use crate::app::pages::{Dashboard, Settings, Workloads};
use crate::config;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
    #[route("/jobs")]
    Workloads {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    // Navigation set is injected via context so tests and future config
    // sources can provide an alternative list
    use_context_provider(config::default_nav);

    use_effect(|| {
        tracing::info!("Green Scheduler app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
