//! Navigation sidebar for the web UI.
//!
//! Entries come from the role's navigation table; the sidebar itself never
//! looks at the role.

use dioxus::prelude::*;

use crate::app::Route;
use crate::nav::NavEntry;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Brand shown at the top
    pub brand: String,
    /// Role navigation entries
    pub entries: &'static [NavEntry],
    /// Account entries (profile, settings)
    pub account: &'static [NavEntry],
    /// Path of the highlighted entry, if any
    #[props(!optional)]
    pub active: Option<&'static str>,
    /// Called when the user signs out
    pub on_logout: EventHandler<()>,
}

/// Navigation bar component using the Pico CSS nav pattern.
#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav { class: "sidebar",
            ul {
                li {
                    Link { to: Route::Home {}, strong { "{props.brand}" } }
                }
            }
            NavList { entries: props.entries, active: props.active }
            NavList { entries: props.account, active: props.active }
            ul {
                li {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| props.on_logout.call(()),
                        "↩ Sair"
                    }
                }
            }
        }
    }
}

#[component]
fn NavList(entries: &'static [NavEntry], #[props(!optional)] active: Option<&'static str>) -> Element {
    rsx! {
        ul {
            for entry in entries.iter().copied() {
                NavItem { key: "{entry.path}", entry, active: active == Some(entry.path) }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, active: bool) -> Element {
    let glyph = entry.icon.glyph();
    let label = entry.label;

    rsx! {
        li { "aria-current": if active { "page" } else { "false" },
            Link { to: Route::from_path(entry.path),
                if active {
                    strong { "{glyph} {label}" }
                } else {
                    "{glyph} {label}"
                }
            }
        }
    }
}
