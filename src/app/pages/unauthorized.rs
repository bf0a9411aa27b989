use dioxus::prelude::*;

use crate::app::Route;

/// Shown when a signed-in user opens a route their role may not use.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        main { class: "centered",
            div { class: "splash-logo", "🔒" }
            h1 { "Acesso negado" }
            p { class: "text-muted",
                "Você não tem permissão para acessar esta página. Por favor, verifique seu tipo de conta."
            }
            Link { to: Route::Home {}, class: "btn btn-primary", "← Voltar para o início" }
        }
    }
}
