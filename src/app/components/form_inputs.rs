//! Reusable form input components.

use dioxus::prelude::*;

/// A labeled text input bound to a string value.
#[component]
pub fn TextField(
    /// Input label
    label: &'static str,
    /// Current value
    value: String,
    /// Called with the new text on every keystroke
    on_input: EventHandler<String>,
    /// HTML input type
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "input",
                r#type: input_type,
                placeholder: placeholder,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A labeled toggle switch with description.
#[component]
pub fn ToggleInput(
    /// Input label
    label: &'static str,
    /// Description text shown below label
    #[props(default = "")]
    description: &'static str,
    /// Current checked state
    checked: bool,
    /// Called when the toggle changes
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-4",
            div { class: "flex-1",
                label { class: "block text-sm font-medium", "{label}" }
                if !description.is_empty() {
                    p { class: "text-xs text-muted", "{description}" }
                }
            }
            input {
                class: "toggle",
                r#type: "checkbox",
                checked: checked,
                onchange: move |e| on_change.call(e.checked()),
            }
        }
    }
}

/// A labeled select over fixed string options.
#[component]
pub fn SelectInput(
    label: &'static str,
    options: Vec<String>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            select {
                class: "input",
                onchange: move |e| on_change.call(e.value()),
                for choice in options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == selected,
                        "{choice}"
                    }
                }
            }
        }
    }
}
