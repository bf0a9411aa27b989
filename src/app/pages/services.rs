//! Service browsing (`/services` and `/explore`): search, category chips,
//! pick to book.

use dioxus::prelude::*;

use crate::app::components::PageHeader;
use crate::app::relay_context::use_relay;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::catalog::{self, ServiceItem, ALL_CATEGORIES, SERVICE_CATEGORIES};
use crate::relay::BookingSelection;

/// Services page component.
#[component]
pub fn Services() -> Element {
    rsx! {
        ServiceBrowser {
            title: "Serviços",
            subtitle: "Escolha um serviço para agendar",
            with_categories: true,
        }
    }
}

/// `/explore`: the same catalog, search only, under a featured heading
#[component]
pub fn Explore() -> Element {
    rsx! {
        ServiceBrowser {
            title: "Explorar Serviços",
            subtitle: "Serviços em Destaque",
            with_categories: false,
        }
    }
}

#[component]
fn ServiceBrowser(title: &'static str, subtitle: &'static str, with_categories: bool) -> Element {
    let relay = use_relay();
    let toast = use_toast();
    let navigator = use_navigator();

    let all_services = use_hook(catalog::services);
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut search = use_signal(String::new);

    let filtered = catalog::filter_services(&all_services, &category(), &search());
    let nothing_found = filtered.is_empty();

    let book = move |service: ServiceItem| {
        let name = service.name.clone();
        match relay.publish(&BookingSelection::Service(service)) {
            Ok(()) => {
                tracing::debug!("Service picked for booking: {}", name);
                navigator.push(Route::Appointments {});
            }
            Err(e) => {
                tracing::warn!("Failed to hand over service selection: {}", e);
                toast.show("Não foi possível agendar", "Tente novamente em instantes");
            }
        }
    };

    rsx! {
        PageHeader {
            title: title.to_string(),
            back: Route::Home {},
            subtitle: subtitle.to_string(),
        }

        input {
            class: "input",
            r#type: "search",
            placeholder: "Buscar serviços...",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }

        if with_categories {
            div { class: "chips",
                for chip in SERVICE_CATEGORIES.iter().copied() {
                    button {
                        key: "{chip}",
                        class: if category() == chip { "chip active" } else { "chip" },
                        onclick: move |_| category.set(chip.to_string()),
                        "{chip}"
                    }
                }
            }
        }

        if nothing_found {
            article { class: "card text-muted", "Nenhum serviço encontrado" }
        }
        div { class: "grid",
            for service in filtered {
                ServiceCard {
                    key: "{service.id}",
                    service,
                    action_label: "Agendar",
                    on_action: move |s: ServiceItem| book(s),
                }
            }
        }
    }
}

/// Service summary card with one action button
#[component]
pub fn ServiceCard(
    service: ServiceItem,
    action_label: &'static str,
    on_action: EventHandler<ServiceItem>,
) -> Element {
    let price = service.price_label();
    let picked = service.clone();

    rsx! {
        article { class: "card service",
            header {
                strong { "{service.name}" }
                span { class: "badge", "{service.category}" }
            }
            p { class: "text-muted", "{service.description}" }
            footer { class: "flex items-center justify-between",
                span { "{service.duration} · {price}" }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_action.call(picked.clone()),
                    "{action_label}"
                }
            }
        }
    }
}
