//! Settings-page preference models: payment methods, notifications and the
//! appearance theme choice.

use crate::session::ThemePreference;

/// Theme choice offered on the appearance page.
///
/// `System` is resolved to light or dark before it reaches the session,
/// which only persists concrete themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Claro",
            ThemeChoice::Dark => "Escuro",
            ThemeChoice::System => "Sistema",
        }
    }

    pub fn resolve(&self, prefers_dark: bool) -> ThemePreference {
        match self {
            ThemeChoice::Light => ThemePreference::Light,
            ThemeChoice::Dark => ThemePreference::Dark,
            ThemeChoice::System if prefers_dark => ThemePreference::Dark,
            ThemeChoice::System => ThemePreference::Light,
        }
    }
}

impl From<ThemePreference> for ThemeChoice {
    fn from(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => ThemeChoice::Light,
            ThemePreference::Dark => ThemeChoice::Dark,
        }
    }
}

/// Payment option accepted by a salon
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    pub has_discount: bool,
    /// Percent
    pub discount: f64,
    pub has_fee: bool,
    /// Percent
    pub fee: f64,
    pub installments: bool,
    pub max_installments: u32,
    /// Minimum purchase for installments, in reais
    pub min_amount: f64,
}

impl PaymentMethod {
    fn new(id: &'static str, name: &'static str, description: &'static str, enabled: bool) -> Self {
        Self {
            id,
            name,
            description,
            enabled,
            has_discount: false,
            discount: 0.0,
            has_fee: false,
            fee: 0.0,
            installments: false,
            max_installments: 1,
            min_amount: 0.0,
        }
    }
}

/// Numeric setting of a payment method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentValue {
    Discount,
    Fee,
    MaxInstallments,
    MinAmount,
}

/// Boolean option of a payment method
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentOption {
    Discount,
    Fee,
    Installments,
}

pub fn default_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            has_discount: true,
            discount: 5.0,
            ..PaymentMethod::new("cash", "Dinheiro", "Pagamentos em espécie", true)
        },
        PaymentMethod {
            has_fee: true,
            fee: 2.0,
            installments: true,
            max_installments: 3,
            min_amount: 100.0,
            ..PaymentMethod::new(
                "credit",
                "Cartão de Crédito",
                "Pagamentos com cartão de crédito",
                true,
            )
        },
        PaymentMethod {
            has_fee: true,
            fee: 1.0,
            ..PaymentMethod::new(
                "debit",
                "Cartão de Débito",
                "Pagamentos com cartão de débito",
                true,
            )
        },
        PaymentMethod {
            has_discount: true,
            discount: 3.0,
            ..PaymentMethod::new("pix", "PIX", "Pagamentos via PIX", true)
        },
        PaymentMethod::new(
            "invoice",
            "Faturamento",
            "Pagamento via boleto/faturamento",
            false,
        ),
    ]
}

fn find_method<'a>(methods: &'a mut [PaymentMethod], id: &str) -> Option<&'a mut PaymentMethod> {
    methods.iter_mut().find(|m| m.id == id)
}

pub fn toggle_payment_method(methods: &mut [PaymentMethod], id: &str) {
    if let Some(method) = find_method(methods, id) {
        method.enabled = !method.enabled;
    }
}

pub fn toggle_payment_option(methods: &mut [PaymentMethod], id: &str, option: PaymentOption) {
    if let Some(method) = find_method(methods, id) {
        let flag = match option {
            PaymentOption::Discount => &mut method.has_discount,
            PaymentOption::Fee => &mut method.has_fee,
            PaymentOption::Installments => &mut method.installments,
        };
        *flag = !*flag;
    }
}

/// Set a numeric value from form input. Empty or unparsable input counts as zero.
pub fn set_payment_value(methods: &mut [PaymentMethod], id: &str, field: PaymentValue, raw: &str) {
    let Some(method) = find_method(methods, id) else {
        return;
    };
    let value = raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0).max(0.0);
    match field {
        PaymentValue::Discount => method.discount = value,
        PaymentValue::Fee => method.fee = value,
        PaymentValue::MaxInstallments => method.max_installments = value as u32,
        PaymentValue::MinAmount => method.min_amount = value,
    }
}

pub const NOTIFICATION_CHANNELS: [&str; 4] = ["email", "sms", "push", "whatsapp"];

pub fn channel_title(channel: &str) -> &'static str {
    match channel {
        "email" => "Email",
        "sms" => "SMS",
        "push" => "Push",
        "whatsapp" => "WhatsApp",
        _ => "Outro",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationChannel {
    pub id: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Enabled flag per channel, in [`NOTIFICATION_CHANNELS`] order
    pub channels: [bool; 4],
}

impl NotificationType {
    pub fn is_enabled(&self, channel: &str) -> bool {
        channel_index(channel).is_some_and(|i| self.channels[i])
    }
}

fn channel_index(channel: &str) -> Option<usize> {
    NOTIFICATION_CHANNELS.iter().position(|c| *c == channel)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSettings {
    pub channels: Vec<NotificationChannel>,
    pub types: Vec<NotificationType>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            channels: vec![
                NotificationChannel {
                    id: "email",
                    description: "Receba notificações por email sobre agendamentos e promoções",
                    enabled: true,
                },
                NotificationChannel {
                    id: "sms",
                    description: "Receba lembretes por SMS sobre seus agendamentos",
                    enabled: true,
                },
                NotificationChannel {
                    id: "push",
                    description: "Receba notificações push no seu dispositivo",
                    enabled: false,
                },
                NotificationChannel {
                    id: "whatsapp",
                    description: "Receba mensagens pelo WhatsApp",
                    enabled: true,
                },
            ],
            types: vec![
                NotificationType {
                    id: "appointments",
                    title: "Agendamentos",
                    description: "Notificações sobre confirmação, lembretes e alterações de agendamentos",
                    channels: [true, true, true, true],
                },
                NotificationType {
                    id: "promotions",
                    title: "Promoções e Novidades",
                    description: "Novidades, promoções especiais e eventos",
                    channels: [true, false, true, false],
                },
                NotificationType {
                    id: "system",
                    title: "Sistema",
                    description: "Informações sobre o sistema, manutenções e atualizações",
                    channels: [true, false, false, false],
                },
            ],
        }
    }
}

impl NotificationSettings {
    pub fn toggle_channel(&mut self, channel: &str) {
        if let Some(c) = self.channels.iter_mut().find(|c| c.id == channel) {
            c.enabled = !c.enabled;
        }
    }

    pub fn toggle_type_channel(&mut self, type_id: &str, channel: &str) {
        let Some(index) = channel_index(channel) else {
            return;
        };
        if let Some(t) = self.types.iter_mut().find(|t| t.id == type_id) {
            t.channels[index] = !t.channels[index];
        }
    }

    pub fn channel_enabled(&self, channel: &str) -> bool {
        self.channels
            .iter()
            .any(|c| c.id == channel && c.enabled)
    }

    /// A type is delivered on a channel only when the channel itself is on
    pub fn delivers(&self, type_id: &str, channel: &str) -> bool {
        self.channel_enabled(channel)
            && self
                .types
                .iter()
                .any(|t| t.id == type_id && t.is_enabled(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_choice_follows_browser_preference() {
        assert_eq!(ThemeChoice::System.resolve(true), ThemePreference::Dark);
        assert_eq!(ThemeChoice::System.resolve(false), ThemePreference::Light);
        assert_eq!(ThemeChoice::Light.resolve(true), ThemePreference::Light);
    }

    #[test]
    fn payment_toggles_target_one_method() {
        let mut methods = default_payment_methods();
        toggle_payment_method(&mut methods, "invoice");
        toggle_payment_option(&mut methods, "pix", PaymentOption::Fee);
        assert!(methods[4].enabled);
        assert!(methods[3].has_fee);
        assert!(!methods[2].has_discount);
    }

    #[test]
    fn payment_values_parse_or_reset_to_zero() {
        let mut methods = default_payment_methods();
        set_payment_value(&mut methods, "cash", PaymentValue::Discount, "7,5");
        set_payment_value(&mut methods, "credit", PaymentValue::Fee, "");
        set_payment_value(&mut methods, "credit", PaymentValue::MaxInstallments, "6");
        assert_eq!(methods[0].discount, 7.5);
        assert_eq!(methods[1].fee, 0.0);
        assert_eq!(methods[1].max_installments, 6);
    }

    #[test]
    fn disabled_channel_blocks_every_type() {
        let mut settings = NotificationSettings::default();
        assert!(!settings.delivers("appointments", "push"));
        settings.toggle_channel("push");
        assert!(settings.delivers("appointments", "push"));
        settings.toggle_type_channel("appointments", "push");
        assert!(!settings.delivers("appointments", "push"));
    }

    #[test]
    fn unknown_channel_is_ignored() {
        let mut settings = NotificationSettings::default();
        let before = settings.clone();
        settings.toggle_type_channel("system", "pigeon");
        settings.toggle_channel("pigeon");
        assert_eq!(settings, before);
    }
}
