//! Login and registration screen.

use dioxus::prelude::*;

use crate::app::components::TextField;
use crate::app::session_context::use_session;
use crate::app::toast::use_toast;
use crate::app::use_app_config;
use crate::forms::{LoginForm, RegisterForm};
use crate::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthScreen() -> Element {
    let session = use_session();
    let toast = use_toast();
    let config = use_app_config();

    let mut tab = use_signal(|| AuthTab::Login);
    let mut account_type = use_signal(|| Role::Client);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);

    let login_config = config.clone();
    let submit = move |_: MouseEvent| {
        let result = match tab() {
            AuthTab::Login => LoginForm {
                email: email(),
                password: password(),
                role: account_type(),
            }
            .into_identity(&login_config),
            AuthTab::Register => RegisterForm {
                name: name(),
                email: email(),
                phone: phone(),
                password: password(),
                role: account_type(),
            }
            .into_identity(),
        };

        match result {
            Ok(identity) => {
                toast.show(
                    "Bem-vindo!",
                    format!("Você entrou como {}", identity.role.label()),
                );
                session.login(identity);
            }
            Err(e) => toast.error(&e),
        }
    };

    rsx! {
        div { class: "auth-screen",
            header {
                div { class: "splash-logo", "✂" }
                h1 { "{config.brand}" }
                p { class: "text-muted", "Agende seus serviços de beleza em poucos toques" }
            }

            article { class: "card",
                div { class: "tabs", role: "tablist",
                    button {
                        class: if tab() == AuthTab::Login { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(AuthTab::Login),
                        "Entrar"
                    }
                    button {
                        class: if tab() == AuthTab::Register { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(AuthTab::Register),
                        "Cadastrar"
                    }
                }

                fieldset { class: "role-choice",
                    legend { "Tipo de conta" }
                    for choice in Role::ALL {
                        label { key: "{choice:?}",
                            input {
                                r#type: "radio",
                                name: "role",
                                checked: account_type() == choice,
                                onchange: move |_| account_type.set(choice),
                            }
                            " "
                            {choice.label()}
                        }
                    }
                }

                if tab() == AuthTab::Register {
                    TextField {
                        label: "Nome",
                        value: name(),
                        on_input: move |v| name.set(v),
                        placeholder: "Seu nome completo",
                    }
                }
                TextField {
                    label: "Email",
                    value: email(),
                    on_input: move |v| email.set(v),
                    input_type: "email",
                    placeholder: "seu@email.com",
                }
                if tab() == AuthTab::Register {
                    TextField {
                        label: "WhatsApp",
                        value: phone(),
                        on_input: move |v| phone.set(v),
                        input_type: "tel",
                        placeholder: "(11) 98765-4321",
                    }
                }
                TextField {
                    label: "Senha",
                    value: password(),
                    on_input: move |v| password.set(v),
                    input_type: "password",
                }

                button { class: "btn btn-primary w-full", onclick: submit,
                    if tab() == AuthTab::Login { "Entrar" } else { "Criar conta" }
                }
            }
        }
    }
}
