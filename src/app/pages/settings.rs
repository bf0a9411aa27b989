//! Settings hub.
//!
//! The sections come from the role's settings table; this page renders
//! whatever it is given.

use dioxus::prelude::*;

use crate::app::components::PageHeader;
use crate::app::session_context::use_session;
use crate::app::Route;
use crate::nav::{settings_sections, SettingsItem, SettingsSection};

/// Settings page component.
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let sections = settings_sections(session.role());

    rsx! {
        PageHeader {
            title: "Configurações".to_string(),
            back: Route::Home {},
        }

        for section in sections {
            SettingsGroup { key: "{section.title}", section }
        }

        section {
            button {
                class: "btn btn-ghost text-error w-full",
                onclick: move |_| {
                    session.logout();
                    navigator.replace(Route::Home {});
                },
                "↩ Sair da conta"
            }
        }
    }
}

#[component]
fn SettingsGroup(section: SettingsSection) -> Element {
    rsx! {
        section {
            h2 { "{section.title}" }
            for item in section.items.iter().copied() {
                SettingsLink { key: "{item.path}", item }
            }
        }
    }
}

#[component]
fn SettingsLink(item: SettingsItem) -> Element {
    let glyph = item.icon.glyph();

    rsx! {
        Link { to: Route::from_path(item.path), class: "card settings-item",
            span { class: "settings-icon", "{glyph}" }
            div {
                strong { "{item.title}" }
                p { class: "text-muted", "{item.description}" }
            }
            span { "›" }
        }
    }
}
