//! Payment methods accepted by the salon.

use dioxus::prelude::*;

use crate::app::components::{PageHeader, ToggleInput};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::preferences::{
    default_payment_methods, set_payment_value, toggle_payment_method, toggle_payment_option,
    PaymentMethod, PaymentOption, PaymentValue,
};

/// Payment methods page component.
#[component]
pub fn PaymentMethods() -> Element {
    let toast = use_toast();
    let mut methods = use_signal(default_payment_methods);

    let save = move |_: MouseEvent| {
        let enabled = methods.read().iter().filter(|m| m.enabled).count();
        toast.show(
            "Métodos de pagamento salvos",
            format!("{enabled} forma(s) de pagamento ativa(s)"),
        );
    };

    let listed = methods();

    rsx! {
        PageHeader {
            title: "Métodos de Pagamento".to_string(),
            back: Route::Settings {},
            subtitle: "Escolha como seus clientes podem pagar".to_string(),
        }

        for method in listed {
            MethodEditor {
                key: "{method.id}",
                method,
                on_toggle: move |id: &'static str| toggle_payment_method(&mut methods.write(), id),
                on_option: move |(id, option): (&'static str, PaymentOption)| {
                    toggle_payment_option(&mut methods.write(), id, option)
                },
                on_value: move |(id, field, raw): (&'static str, PaymentValue, String)| {
                    set_payment_value(&mut methods.write(), id, field, &raw)
                },
            }
        }

        button { class: "btn btn-primary w-full", onclick: save, "Salvar" }
    }
}

#[component]
fn MethodEditor(
    method: PaymentMethod,
    on_toggle: EventHandler<&'static str>,
    on_option: EventHandler<(&'static str, PaymentOption)>,
    on_value: EventHandler<(&'static str, PaymentValue, String)>,
) -> Element {
    let id = method.id;

    rsx! {
        article { class: "card payment-method",
            ToggleInput {
                label: method.name,
                description: method.description,
                checked: method.enabled,
                on_change: move |_| on_toggle.call(id),
            }
            if method.enabled {
                OptionRow {
                    label: "Desconto (%)",
                    checked: method.has_discount,
                    value: method.discount.to_string(),
                    on_check: move |_| on_option.call((id, PaymentOption::Discount)),
                    on_input: move |raw: String| on_value.call((id, PaymentValue::Discount, raw)),
                }
                OptionRow {
                    label: "Taxa (%)",
                    checked: method.has_fee,
                    value: method.fee.to_string(),
                    on_check: move |_| on_option.call((id, PaymentOption::Fee)),
                    on_input: move |raw: String| on_value.call((id, PaymentValue::Fee, raw)),
                }
                OptionRow {
                    label: "Parcelamento (máx. parcelas)",
                    checked: method.installments,
                    value: method.max_installments.to_string(),
                    on_check: move |_| on_option.call((id, PaymentOption::Installments)),
                    on_input: move |raw: String| {
                        on_value.call((id, PaymentValue::MaxInstallments, raw))
                    },
                }
                if method.installments {
                    label { class: "field",
                        span { class: "field-label", "Valor mínimo para parcelar (R$)" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "0",
                            value: "{method.min_amount}",
                            oninput: move |e| on_value.call((id, PaymentValue::MinAmount, e.value())),
                        }
                    }
                }
            }
        }
    }
}

/// Checkbox that reveals a numeric input when ticked
#[component]
fn OptionRow(
    label: &'static str,
    checked: bool,
    value: String,
    on_check: EventHandler<bool>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-4",
            ToggleInput { label, checked, on_change: move |on: bool| on_check.call(on) }
            if checked {
                input {
                    class: "input w-20 text-center",
                    r#type: "number",
                    min: "0",
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
        }
    }
}
