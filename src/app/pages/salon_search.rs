//! Salon search with filters, favorites and pick to book.

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::app::components::PageHeader;
use crate::app::relay_context::use_relay;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::catalog::{self, SalonFilter, SalonItem};
use crate::relay::BookingSelection;

/// Salon search page component.
#[component]
pub fn SalonSearch() -> Element {
    let relay = use_relay();
    let toast = use_toast();
    let navigator = use_navigator();

    let all_salons = use_hook(catalog::salons);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(SalonFilter::default);
    let mut favorites = use_signal(HashSet::<String>::new);

    let found = catalog::search_salons(&all_salons, &search(), filter());
    let count = found.len();
    let cards: Vec<(SalonItem, bool)> = found
        .into_iter()
        .map(|salon| {
            let favorite = favorites.read().contains(&salon.id);
            (salon, favorite)
        })
        .collect();

    let mut toggle_favorite = move |salon: SalonItem| {
        let added = {
            let mut favs = favorites.write();
            if favs.remove(&salon.id) {
                false
            } else {
                favs.insert(salon.id.clone());
                true
            }
        };
        if added {
            toast.show(
                "Adicionado aos favoritos",
                format!("{} foi adicionado aos seus favoritos", salon.name),
            );
        } else {
            toast.show(
                "Removido dos favoritos",
                format!("{} foi removido dos seus favoritos", salon.name),
            );
        }
    };

    let book = move |salon: SalonItem| {
        match relay.publish(&BookingSelection::Salon(salon)) {
            Ok(()) => {
                navigator.push(Route::Services {});
            }
            Err(e) => {
                tracing::warn!("Failed to hand over salon selection: {}", e);
                toast.show("Não foi possível agendar", "Tente novamente em instantes");
            }
        }
    };

    rsx! {
        PageHeader {
            title: "Explorar Salões".to_string(),
            back: Route::Home {},
            subtitle: "Encontre o salão ideal perto de você".to_string(),
        }

        input {
            class: "input",
            r#type: "search",
            placeholder: "Buscar por nome, serviço...",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }

        div { class: "chips",
            for mode in SalonFilter::ALL {
                button {
                    key: "{mode:?}",
                    class: if filter() == mode { "chip active" } else { "chip" },
                    onclick: move |_| filter.set(mode),
                    {mode.label()}
                }
            }
        }

        if count == 0 {
            article { class: "card text-muted",
                p { "Nenhum salão encontrado" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        search.set(String::new());
                        filter.set(SalonFilter::All);
                    },
                    "Limpar busca"
                }
            }
        } else {
            p { class: "text-muted",
                "{count} salões "
                {filter().description()}
            }
        }

        for (salon, favorite) in cards {
            SalonCard {
                key: "{salon.id}",
                salon,
                favorite,
                on_favorite: move |s: SalonItem| toggle_favorite(s),
                on_book: move |s: SalonItem| book(s),
            }
        }
    }
}

#[component]
fn SalonCard(
    salon: SalonItem,
    favorite: bool,
    on_favorite: EventHandler<SalonItem>,
    on_book: EventHandler<SalonItem>,
) -> Element {
    let distance = salon.distance_label();
    let services = salon.services.join(", ");
    let for_favorite = salon.clone();
    let for_booking = salon.clone();

    rsx! {
        article { class: "card salon",
            header { class: "flex items-center justify-between",
                strong { "{salon.name}" }
                button {
                    class: "btn btn-ghost btn-sm",
                    "aria-pressed": if favorite { "true" } else { "false" },
                    onclick: move |_| on_favorite.call(for_favorite.clone()),
                    if favorite { "♥" } else { "♡" }
                }
            }
            p { class: "text-muted", "{salon.description}" }
            p { "{salon.address} · {distance}" }
            p { "★ {salon.rating} ({salon.reviews} avaliações)" }
            p { class: "text-muted", "{services}" }
            footer { class: "flex items-center justify-between",
                if salon.open_now {
                    span { class: "status-ok", "Aberto agora" }
                } else {
                    span { class: "status-err", "Fechado" }
                }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_book.call(for_booking.clone()),
                    "Agendar"
                }
            }
        }
    }
}
