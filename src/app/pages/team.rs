//! Team management for salon operators.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, TextField};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::catalog::{self, TeamMember};
use crate::forms::MemberForm;

use super::salon_services::Editing;

/// Team page component.
#[component]
pub fn TeamMembers() -> Element {
    let toast = use_toast();

    let mut members = use_signal(catalog::team_members);
    let mut editing = use_signal(|| Editing::Closed);
    let mut form = use_signal(MemberForm::default);

    let mut open_editor = move |member: Option<TeamMember>| match member {
        Some(member) => {
            form.set(MemberForm::from_member(&member));
            editing.set(Editing::Existing(member.id));
        }
        None => {
            form.set(MemberForm::default());
            editing.set(Editing::New);
        }
    };

    let save = move |_: MouseEvent| {
        let id = match editing() {
            Editing::Existing(id) => id,
            Editing::New => catalog::new_id(),
            Editing::Closed => return,
        };
        match form().into_member(id) {
            Ok(member) => {
                toast.show("Profissional salvo", format!("{} faz parte da equipe", member.name));
                catalog::upsert(&mut members.write(), member, |m| m.id.as_str());
                editing.set(Editing::Closed);
            }
            Err(e) => toast.error(&e),
        }
    };

    let mut remove = move |member: TeamMember| {
        members.write().retain(|m| m.id != member.id);
        toast.show("Profissional removido", format!("{} foi removido da equipe", member.name));
    };

    let listed = members();
    let no_members = listed.is_empty();

    rsx! {
        PageHeader {
            title: "Equipe".to_string(),
            back: Route::Home {},
            subtitle: "Profissionais do seu salão".to_string(),
        }

        button { class: "btn btn-primary", onclick: move |_| open_editor(None), "+ Adicionar profissional" }

        if editing() != Editing::Closed {
            article { class: "card editor",
                h2 {
                    if editing() == Editing::New { "Novo profissional" } else { "Editar profissional" }
                }
                TextField {
                    label: "Nome",
                    value: form.read().name.clone(),
                    on_input: move |v| form.write().name = v,
                }
                TextField {
                    label: "Função",
                    value: form.read().position.clone(),
                    on_input: move |v| form.write().position = v,
                    placeholder: "Cabeleireira",
                }
                TextField {
                    label: "Email",
                    value: form.read().email.clone(),
                    on_input: move |v| form.write().email = v,
                    input_type: "email",
                }
                TextField {
                    label: "Telefone",
                    value: form.read().phone.clone(),
                    on_input: move |v| form.write().phone = v,
                    input_type: "tel",
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

        if no_members {
            article { class: "card text-muted", "Nenhum profissional cadastrado" }
        }
        for member in listed {
            MemberCard {
                key: "{member.id}",
                member,
                on_edit: move |m: TeamMember| open_editor(Some(m)),
                on_remove: move |m: TeamMember| remove(m),
            }
        }
    }
}

#[component]
fn MemberCard(
    member: TeamMember,
    on_edit: EventHandler<TeamMember>,
    on_remove: EventHandler<TeamMember>,
) -> Element {
    let for_edit = member.clone();
    let for_remove = member.clone();

    rsx! {
        article { class: "card member",
            header {
                strong { "{member.name}" }
                span { class: "badge", "{member.position}" }
            }
            p { "✉ {member.email}" }
            p { "☎ {member.phone}" }
            footer { class: "flex gap-2",
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Editar"
                }
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    onclick: move |_| on_remove.call(for_remove.clone()),
                    "Excluir"
                }
            }
        }
    }
}
