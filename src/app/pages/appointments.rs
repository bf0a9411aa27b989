//! Appointments page: status tabs plus the booking panel.
//!
//! A selection handed over by the services or salon search page is consumed
//! once when the page mounts and opens the booking panel.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, SelectInput, TextField};
use crate::app::relay_context::use_relay;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::catalog::{self, Appointment, AppointmentStatus};
use crate::forms::BookingForm;
use crate::relay::BookingSelection;
use crate::schedule::{format_time, time_slots};

/// Appointments page component.
#[component]
pub fn Appointments() -> Element {
    let relay = use_relay();
    let toast = use_toast();

    let mut appointments = use_signal(catalog::appointments);
    let mut status = use_signal(|| AppointmentStatus::Upcoming);

    // Runs once on mount; the relay slot is empty afterwards
    let mut selection = use_signal(move || relay.consume_if_present());
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);

    let confirm = move |_: MouseEvent| {
        let Some(pending) = selection() else {
            return;
        };
        let form = BookingForm {
            date: date(),
            time: time(),
        };
        match form.parse() {
            Ok((day, at)) => {
                let booked = pending.book(catalog::new_id(), day, at);
                toast.show(
                    "Agendamento confirmado!",
                    format!("{} em {} às {}", booked.service, booked.date_label(), booked.time_label()),
                );
                appointments.write().push(booked);
                selection.set(None);
                date.set(String::new());
                time.set(String::new());
                status.set(AppointmentStatus::Upcoming);
            }
            Err(e) => toast.error(&e),
        }
    };

    let visible = catalog::appointments_with_status(&appointments.read(), status());
    let nothing_to_show = visible.is_empty();
    let slots: Vec<String> = std::iter::once(String::new())
        .chain(time_slots().into_iter().map(format_time))
        .collect();

    rsx! {
        PageHeader {
            title: "Meus Agendamentos".to_string(),
            back: Route::Home {},
        }

        if let Some(pending) = selection() {
            article { class: "card booking-panel",
                h2 { "Novo agendamento" }
                BookingSummary { selection: pending }
                TextField {
                    label: "Data",
                    value: date(),
                    on_input: move |v| date.set(v),
                    input_type: "date",
                }
                SelectInput {
                    label: "Horário",
                    options: slots,
                    selected: time(),
                    on_change: move |v| time.set(v),
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| selection.set(None),
                        "Cancelar"
                    }
                    button { class: "btn btn-primary", onclick: confirm, "Confirmar" }
                }
            }
        }

        div { class: "tabs", role: "tablist",
            for tab in AppointmentStatus::ALL {
                button {
                    key: "{tab:?}",
                    class: if status() == tab { "tab active" } else { "tab" },
                    onclick: move |_| status.set(tab),
                    {tab.tab_label()}
                }
            }
        }

        if nothing_to_show {
            article { class: "card text-muted", {status().empty_message()} }
        }
        for appointment in visible {
            AppointmentCard { key: "{appointment.id}", appointment }
        }
    }
}

#[component]
fn BookingSummary(selection: BookingSelection) -> Element {
    match selection {
        BookingSelection::Service(service) => {
            let price = service.price_label();
            rsx! {
                p {
                    strong { "{service.name}" }
                    span { class: "text-muted", " · {service.duration} · {price}" }
                }
            }
        }
        BookingSelection::Salon(salon) => rsx! {
            p {
                strong { "{salon.name}" }
                span { class: "text-muted", " · {salon.address}" }
            }
        },
    }
}

/// One appointment with its status badge
#[component]
pub fn AppointmentCard(appointment: Appointment) -> Element {
    let date = appointment.date_label();
    let time = appointment.time_label();
    let badge = appointment.status.badge();

    rsx! {
        article { class: "card appointment",
            div { class: "flex items-center justify-between",
                strong { "{appointment.service}" }
                span { class: "badge", "{badge}" }
            }
            p { "{date} · {time}" }
            p { class: "text-muted", "{appointment.professional} · {appointment.location}" }
        }
    }
}
