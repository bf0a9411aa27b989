//! Dashboard shown on the entry route once signed in.

use dioxus::prelude::*;

use crate::app::session_context::use_session;
use crate::app::Route;
use crate::catalog::{self, AppointmentStatus};
use crate::nav::{entries_for, NavEntry};
use crate::session::Identity;

use super::appointments::AppointmentCard;

/// Dashboard page component.
#[component]
pub fn Dashboard(identity: Identity) -> Element {
    let session = use_session();
    let first_name = identity.first_name().to_string();

    let upcoming: Vec<_> =
        catalog::appointments_with_status(&catalog::appointments(), AppointmentStatus::Upcoming)
            .into_iter()
            .take(2)
            .collect();
    let nothing_upcoming = upcoming.is_empty();

    // Quick actions: the role's navigation minus the dashboard itself
    let quick_links: Vec<NavEntry> = entries_for(session.role())
        .iter()
        .copied()
        .filter(|entry| entry.path != "/")
        .collect();

    rsx! {
        section {
            h1 { "Olá, {first_name}!" }
            p { class: "text-muted", "O que vamos fazer hoje?" }
        }

        section { class: "quick-actions",
            for entry in quick_links {
                QuickAction { key: "{entry.path}", entry }
            }
        }

        section {
            div { class: "flex items-center justify-between",
                h2 { "Próximos agendamentos" }
                Link { to: Route::Appointments {}, class: "btn btn-ghost btn-sm", "Ver todos →" }
            }
            if nothing_upcoming {
                article { class: "card text-muted", {AppointmentStatus::Upcoming.empty_message()} }
            }
            for appointment in upcoming {
                AppointmentCard { key: "{appointment.id}", appointment }
            }
        }
    }
}

#[component]
fn QuickAction(entry: NavEntry) -> Element {
    let glyph = entry.icon.glyph();
    let label = entry.label;

    rsx! {
        Link { to: Route::from_path(entry.path), class: "card quick-action",
            span { class: "quick-action-icon", "{glyph}" }
            span { "{label}" }
        }
    }
}
