//! Toast viewport.

use dioxus::prelude::*;

use crate::app::toast::use_toast;

/// Renders the active toasts, newest last.
#[component]
pub fn Toaster() -> Element {
    let toast = use_toast();
    let toasts = toast.list();

    rsx! {
        div { class: "toaster", role: "status",
            for item in toasts {
                div {
                    key: "{item.id}",
                    class: if item.destructive { "toast toast-error" } else { "toast" },
                    strong { "{item.title}" }
                    if !item.description.is_empty() {
                        p { "{item.description}" }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| toast.dismiss(item.id),
                        "×"
                    }
                }
            }
        }
    }
}
