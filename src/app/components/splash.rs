//! Brand splash, used for the intro and while the session loads.

use dioxus::prelude::*;

use crate::app::use_app_config;

#[component]
pub fn SplashScreen() -> Element {
    let config = use_app_config();

    rsx! {
        div { class: "splash", aria_busy: "true",
            div { class: "splash-logo", "✂" }
            h1 { "{config.brand}" }
            p { class: "text-muted", "Seu salão a um toque de distância" }
            div { class: "splash-progress" }
        }
    }
}
