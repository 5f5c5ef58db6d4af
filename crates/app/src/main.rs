use client::config::app_config;
use client::HttpAuthApi;
use dioxus::prelude::*;
use shared_types::AppConfig;

mod clock;
mod form_store;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Config and the backend client are shared by every page via context.
    let config: AppConfig = use_context_provider(|| app_config().clone());
    use_context_provider(|| HttpAuthApi::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
