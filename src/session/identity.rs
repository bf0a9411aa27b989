//! Identity, role and theme types shared by the session and the UI.

use serde::{Deserialize, Serialize};

/// Role of the signed-in principal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Books beauty services
    #[serde(rename = "client")]
    Client,
    /// Runs a salon: services, team, schedule. Older stored sessions say "salon".
    #[serde(rename = "salon-operator", alias = "salon")]
    SalonOperator,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Client, Role::SalonOperator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::SalonOperator => "salon-operator",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Role::Client),
            "salon-operator" | "salon" => Some(Role::SalonOperator),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Client => "Cliente",
            Role::SalonOperator => "Salão",
        }
    }
}

/// Persisted theme preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but "light"/"dark" is treated as absent.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Claro",
            ThemePreference::Dark => "Escuro",
        }
    }

    /// CSS class to apply to :root
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemePreference::Light => "theme-light",
            ThemePreference::Dark => "theme-dark",
        }
    }
}

/// The signed-in principal.
///
/// Stored as camelCase JSON: `{id, name, email, role, avatar?, themePreference?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_preference: Option<ThemePreference>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            theme_preference: None,
        }
    }

    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.theme_preference = Some(theme);
        self
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Up to two uppercase initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
