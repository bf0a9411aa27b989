use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route for {}", path);

    rsx! {
        main { class: "centered",
            h1 { "404" }
            p { class: "text-muted", "Página não encontrada: {path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Voltar para o início" }
        }
    }
}
