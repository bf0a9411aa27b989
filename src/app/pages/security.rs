//! Account security: password change and two-factor setup.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, TextField, ToggleInput};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::forms::{validate_verification_code, PasswordChangeForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TwoFactor {
    Off,
    /// Code sent, waiting for the user to type it
    Verifying,
    On,
}

/// Security page component.
#[component]
pub fn Security() -> Element {
    let toast = use_toast();

    let mut passwords = use_signal(PasswordChangeForm::default);
    let mut two_factor = use_signal(|| TwoFactor::Off);
    let mut code = use_signal(String::new);

    let change_password = move |_: MouseEvent| {
        let result = passwords.write().submit();
        match result {
            Ok(()) => toast.show("Senha alterada", "Sua senha foi atualizada com sucesso"),
            Err(e) => toast.error(&e),
        }
    };

    let verify = move |_: MouseEvent| match validate_verification_code(&code()) {
        Ok(()) => {
            two_factor.set(TwoFactor::On);
            code.set(String::new());
            toast.show(
                "Verificação em duas etapas ativada",
                "Sua conta está mais protegida",
            );
        }
        Err(e) => toast.error(&e),
    };

    rsx! {
        PageHeader {
            title: "Segurança".to_string(),
            back: Route::Settings {},
        }

        section {
            h2 { "Alterar senha" }
            article { class: "card",
                TextField {
                    label: "Senha atual",
                    value: passwords.read().current.clone(),
                    on_input: move |v| passwords.write().current = v,
                    input_type: "password",
                }
                TextField {
                    label: "Nova senha",
                    value: passwords.read().new.clone(),
                    on_input: move |v| passwords.write().new = v,
                    input_type: "password",
                }
                TextField {
                    label: "Confirmar nova senha",
                    value: passwords.read().confirm.clone(),
                    on_input: move |v| passwords.write().confirm = v,
                    input_type: "password",
                }
                button { class: "btn btn-primary", onclick: change_password, "Alterar senha" }
            }
        }

        section {
            h2 { "Verificação em duas etapas" }
            article { class: "card",
                ToggleInput {
                    label: "Ativar verificação por SMS",
                    description: "Um código será enviado ao seu celular a cada login",
                    checked: two_factor() != TwoFactor::Off,
                    on_change: move |on: bool| {
                        if on {
                            two_factor.set(TwoFactor::Verifying);
                            toast.show("Código enviado", "Digite o código de 6 dígitos recebido via SMS");
                        } else {
                            two_factor.set(TwoFactor::Off);
                            toast.show("Verificação desativada", "A verificação em duas etapas foi desligada");
                        }
                    },
                }
                if two_factor() == TwoFactor::Verifying {
                    TextField {
                        label: "Código de verificação",
                        value: code(),
                        on_input: move |v| code.set(v),
                        placeholder: "000000",
                    }
                    button { class: "btn btn-primary", onclick: verify, "Verificar" }
                }
                if two_factor() == TwoFactor::On {
                    p { class: "status-ok", "✓ Verificação em duas etapas ativa" }
                }
            }
        }
    }
}
