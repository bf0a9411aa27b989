//! Appearance settings: theme and motion.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, ToggleInput};
use crate::app::session_context::use_session;
use crate::app::theme::prefers_dark;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::preferences::ThemeChoice;

/// Appearance page component.
#[component]
pub fn Appearance() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut choice = use_signal(|| ThemeChoice::from(session.theme()));
    let mut animations = use_signal(|| true);
    let mut reduced_motion = use_signal(|| false);

    let mut pick = move |picked: ThemeChoice| {
        choice.set(picked);
        let theme = picked.resolve(prefers_dark());
        session.set_theme(theme);
        toast.show("Tema atualizado", format!("Tema {} aplicado", theme.label().to_lowercase()));
    };

    rsx! {
        PageHeader {
            title: "Aparência".to_string(),
            back: Route::Settings {},
        }

        section {
            h2 { "Tema" }
            div { class: "theme-options",
                for mode in ThemeChoice::ALL {
                    button {
                        key: "{mode:?}",
                        class: if choice() == mode { "card theme-option active" } else { "card theme-option" },
                        onclick: move |_| pick(mode),
                        {mode.label()}
                    }
                }
            }
        }

        section {
            h2 { "Movimento" }
            article { class: "card",
                ToggleInput {
                    label: "Animações",
                    description: "Transições suaves entre telas",
                    checked: animations(),
                    on_change: move |on: bool| {
                        animations.set(on);
                        toast.show(
                            "Preferência salva",
                            if on { "Animações ativadas" } else { "Animações desativadas" },
                        );
                    },
                }
                ToggleInput {
                    label: "Reduzir movimento",
                    description: "Minimiza animações para maior conforto visual",
                    checked: reduced_motion(),
                    on_change: move |on: bool| {
                        reduced_motion.set(on);
                        toast.show(
                            "Preferência salva",
                            if on { "Movimento reduzido" } else { "Movimento padrão" },
                        );
                    },
                }
            }
        }
    }
}
