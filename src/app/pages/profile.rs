//! Profile page: identity card and account links.

use dioxus::prelude::*;

use crate::app::components::PageHeader;
use crate::app::session_context::use_session;
use crate::app::Route;
use crate::nav::{account_entries, NavEntry};

/// Profile page component.
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    // The gate only renders this page with an identity present
    let Some(identity) = session.identity() else {
        return rsx! {};
    };
    let initials = identity.initials();
    let role = identity.role.label();

    rsx! {
        PageHeader {
            title: "Perfil".to_string(),
            back: Route::Home {},
        }

        article { class: "card profile",
            div { class: "avatar", "{initials}" }
            div {
                h2 { "{identity.name}" }
                p { class: "text-muted", "{identity.email}" }
                span { class: "badge", "{role}" }
            }
        }

        section {
            for entry in account_entries().iter().copied() {
                AccountLink { key: "{entry.path}", entry }
            }
            button {
                class: "btn btn-ghost text-error w-full",
                onclick: move |_| {
                    session.logout();
                    navigator.replace(Route::Home {});
                },
                "↩ Sair"
            }
        }
    }
}

#[component]
fn AccountLink(entry: NavEntry) -> Element {
    let glyph = entry.icon.glyph();
    let label = entry.label;

    rsx! {
        Link { to: Route::from_path(entry.path), class: "card settings-item",
            span { class: "settings-icon", "{glyph}" }
            strong { "{label}" }
            span { "›" }
        }
    }
}
