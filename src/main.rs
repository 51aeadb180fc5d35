use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod services;

use components::GlobalStatisticScreen;
use config::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        GlobalStatisticScreen { config }
    }
}
