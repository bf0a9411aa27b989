//! Notification channel and type preferences.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, ToggleInput};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::preferences::{
    channel_title, NotificationChannel, NotificationSettings, NotificationType,
    NOTIFICATION_CHANNELS,
};

/// Notifications page component.
#[component]
pub fn Notifications() -> Element {
    let toast = use_toast();
    let mut settings = use_signal(NotificationSettings::default);

    let current = settings();

    rsx! {
        PageHeader {
            title: "Notificações".to_string(),
            back: Route::Settings {},
        }

        section {
            h2 { "Canais" }
            article { class: "card",
                for channel in current.channels.iter().cloned() {
                    ChannelToggle {
                        key: "{channel.id}",
                        channel,
                        on_toggle: move |id: &'static str| settings.write().toggle_channel(id),
                    }
                }
            }
        }

        section {
            h2 { "Tipos de notificação" }
            for kind in current.types.iter().cloned() {
                TypeEditor {
                    key: "{kind.id}",
                    kind,
                    settings: current.clone(),
                    on_toggle: move |(type_id, channel): (&'static str, &'static str)| {
                        settings.write().toggle_type_channel(type_id, channel)
                    },
                }
            }
        }

        button {
            class: "btn btn-primary w-full",
            onclick: move |_| toast.show("Preferências salvas", "Suas notificações foram atualizadas"),
            "Salvar"
        }
    }
}

#[component]
fn ChannelToggle(channel: NotificationChannel, on_toggle: EventHandler<&'static str>) -> Element {
    let id = channel.id;

    rsx! {
        ToggleInput {
            label: channel_title(id),
            description: channel.description,
            checked: channel.enabled,
            on_change: move |_| on_toggle.call(id),
        }
    }
}

/// One notification type with a checkbox per channel. Channels that are
/// switched off are shown disabled.
#[component]
fn TypeEditor(
    kind: NotificationType,
    settings: NotificationSettings,
    on_toggle: EventHandler<(&'static str, &'static str)>,
) -> Element {
    let type_id = kind.id;

    rsx! {
        article { class: "card",
            strong { "{kind.title}" }
            p { class: "text-muted", "{kind.description}" }
            div { class: "flex gap-4",
                for channel in NOTIFICATION_CHANNELS {
                    label { key: "{channel}",
                        input {
                            r#type: "checkbox",
                            checked: kind.is_enabled(channel),
                            disabled: !settings.channel_enabled(channel),
                            onchange: move |_| on_toggle.call((type_id, channel)),
                        }
                        " "
                        {channel_title(channel)}
                    }
                }
            }
        }
    }
}
