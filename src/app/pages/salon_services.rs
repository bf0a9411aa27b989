//! Salon service catalog management.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, SelectInput, TextField};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::catalog::{self, ServiceItem, SERVICE_CATEGORIES};
use crate::forms::ServiceForm;

use super::services::ServiceCard;

/// Which record the editor is working on
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Editing {
    Closed,
    New,
    Existing(String),
}

/// Salon services page component.
#[component]
pub fn SalonServices() -> Element {
    let toast = use_toast();

    let mut services = use_signal(catalog::salon_services);
    let mut editing = use_signal(|| Editing::Closed);
    let mut form = use_signal(ServiceForm::default);

    let mut open_editor = move |service: Option<ServiceItem>| match service {
        Some(service) => {
            form.set(ServiceForm::from_service(&service));
            editing.set(Editing::Existing(service.id));
        }
        None => {
            form.set(ServiceForm::default());
            editing.set(Editing::New);
        }
    };

    let save = move |_: MouseEvent| {
        let id = match editing() {
            Editing::Existing(id) => id,
            Editing::New => catalog::new_id(),
            Editing::Closed => return,
        };
        match form().into_service(id) {
            Ok(service) => {
                toast.show("Serviço salvo", format!("{} foi salvo com sucesso", service.name));
                catalog::upsert(&mut services.write(), service, |s| s.id.as_str());
                editing.set(Editing::Closed);
            }
            Err(e) => toast.error(&e),
        }
    };

    let mut delete = move |service: ServiceItem| {
        services.write().retain(|s| s.id != service.id);
        toast.show("Serviço removido", format!("{} foi removido", service.name));
    };

    let categories: Vec<String> = SERVICE_CATEGORIES
        .iter()
        .skip(1)
        .map(|c| c.to_string())
        .collect();
    let listed = services();

    rsx! {
        PageHeader {
            title: "Meus Serviços".to_string(),
            back: Route::Home {},
            subtitle: "Gerencie os serviços oferecidos pelo seu salão".to_string(),
        }

        button { class: "btn btn-primary", onclick: move |_| open_editor(None), "+ Novo serviço" }

        if editing() != Editing::Closed {
            article { class: "card editor",
                h2 {
                    if editing() == Editing::New { "Novo serviço" } else { "Editar serviço" }
                }
                TextField {
                    label: "Nome",
                    value: form.read().name.clone(),
                    on_input: move |v| form.write().name = v,
                }
                TextField {
                    label: "Descrição",
                    value: form.read().description.clone(),
                    on_input: move |v| form.write().description = v,
                }
                TextField {
                    label: "Preço (R$)",
                    value: form.read().price.clone(),
                    on_input: move |v| form.write().price = v,
                    placeholder: "60,00",
                }
                TextField {
                    label: "Duração",
                    value: form.read().duration.clone(),
                    on_input: move |v| form.write().duration = v,
                    placeholder: "45 min",
                }
                SelectInput {
                    label: "Categoria",
                    options: categories,
                    selected: form.read().category.clone(),
                    on_change: move |v| form.write().category = v,
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| editing.set(Editing::Closed),
                        "Cancelar"
                    }
                    button { class: "btn btn-primary", onclick: save, "Salvar" }
                }
            }
        }

        div { class: "grid",
            for service in listed {
                ManagedService {
                    key: "{service.id}",
                    service,
                    on_edit: move |s: ServiceItem| open_editor(Some(s)),
                    on_delete: move |s: ServiceItem| delete(s),
                }
            }
        }
    }
}

#[component]
fn ManagedService(
    service: ServiceItem,
    on_edit: EventHandler<ServiceItem>,
    on_delete: EventHandler<ServiceItem>,
) -> Element {
    let for_delete = service.clone();

    rsx! {
        div { class: "managed",
            ServiceCard {
                service,
                action_label: "Editar",
                on_action: move |s: ServiceItem| on_edit.call(s),
            }
            button {
                class: "btn btn-ghost btn-sm text-error",
                onclick: move |_| on_delete.call(for_delete.clone()),
                "Excluir"
            }
        }
    }
}
