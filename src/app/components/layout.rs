//! Layout component wrapping every signed-in page.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::session_context::use_session;
use crate::app::{use_app_config, Route};
use crate::nav::{account_entries, active_entry, entries_for};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Main layout: role navigation, page content, version footer.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("SALAOZAP_VERSION");
    let git_sha = env!("SALAOZAP_GIT_SHA");
    let session = use_session();
    let config = use_app_config();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let role = session.role();
    let path = route.to_string();
    let active = active_entry(role, &path).map(|entry| entry.path);

    rsx! {
        document::Title { "{config.brand}" }

        div { class: "app-shell",
            Nav {
                brand: config.brand.clone(),
                entries: entries_for(role),
                account: account_entries(),
                active,
                on_logout: move |_| {
                    session.logout();
                    navigator.replace(Route::Home {});
                },
            }
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-4",
                {props.children}
            }
        }
        footer { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center py-3",
            small { class: "text-muted", "{config.brand} v{version} ({git_sha})" }
        }
    }
}

/// Page heading with a back link.
#[component]
pub fn PageHeader(title: String, back: Route, #[props(default)] subtitle: String) -> Element {
    rsx! {
        header { class: "page-header",
            Link { to: back, class: "btn btn-ghost btn-sm", "←" }
            div {
                h1 { "{title}" }
                if !subtitle.is_empty() {
                    p { class: "text-muted", "{subtitle}" }
                }
            }
        }
    }
}
