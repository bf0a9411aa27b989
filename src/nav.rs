//! Role-conditional navigation tables.
//!
//! Every role-dependent menu in the UI is read from here; pages never switch
//! on [`Role`] themselves.

use crate::session::Role;

/// Icon reference rendered by the UI layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Search,
    PlusCircle,
    Calendar,
    Scissors,
    Users,
    User,
    Settings,
    LogOut,
    Paintbrush,
    Bell,
    Shield,
    Clock,
    CreditCard,
}

impl NavIcon {
    /// Text glyph used in place of an icon font
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "⌂",
            NavIcon::Search => "⌕",
            NavIcon::PlusCircle => "⊕",
            NavIcon::Calendar => "▦",
            NavIcon::Scissors => "✂",
            NavIcon::Users => "☷",
            NavIcon::User => "☺",
            NavIcon::Settings => "⚙",
            NavIcon::LogOut => "⎋",
            NavIcon::Paintbrush => "✎",
            NavIcon::Bell => "♪",
            NavIcon::Shield => "⛨",
            NavIcon::Clock => "◷",
            NavIcon::CreditCard => "▭",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

const fn entry(label: &'static str, icon: NavIcon, path: &'static str) -> NavEntry {
    NavEntry { label, icon, path }
}

const CLIENT_NAV: &[NavEntry] = &[
    entry("Início", NavIcon::Home, "/"),
    entry("Explorar Salões", NavIcon::Search, "/search"),
    entry("Agendar", NavIcon::PlusCircle, "/services"),
    entry("Minha Agenda", NavIcon::Calendar, "/appointments"),
];

const SALON_NAV: &[NavEntry] = &[
    entry("Início", NavIcon::Home, "/"),
    entry("Agenda", NavIcon::Calendar, "/appointments"),
    entry("Serviços", NavIcon::Scissors, "/salon/services"),
    entry("Equipe", NavIcon::Users, "/team"),
];

const ACCOUNT_NAV: &[NavEntry] = &[
    entry("Perfil", NavIcon::User, "/profile"),
    entry("Configurações", NavIcon::Settings, "/settings"),
];

/// Main navigation for a role. No identity falls back to the client table.
pub fn entries_for(role: Option<Role>) -> &'static [NavEntry] {
    match role {
        Some(Role::SalonOperator) => SALON_NAV,
        Some(Role::Client) | None => CLIENT_NAV,
    }
}

/// Account links shown to every signed-in user
pub fn account_entries() -> &'static [NavEntry] {
    ACCOUNT_NAV
}

/// Entry whose path matches the current location, if any
pub fn active_entry(role: Option<Role>, path: &str) -> Option<&'static NavEntry> {
    entries_for(role)
        .iter()
        .chain(account_entries())
        .find(|entry| entry.path == path)
}

/// Item on the settings hub
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub items: &'static [SettingsItem],
}

const GENERAL_SETTINGS: SettingsSection = SettingsSection {
    title: "Gerais",
    items: &[
        SettingsItem {
            title: "Aparência",
            description: "Personalize a aparência do aplicativo",
            icon: NavIcon::Paintbrush,
            path: "/settings/appearance",
        },
        SettingsItem {
            title: "Notificações",
            description: "Configure como e quando recebe notificações",
            icon: NavIcon::Bell,
            path: "/settings/notifications",
        },
        SettingsItem {
            title: "Segurança",
            description: "Gerencie as configurações de segurança da sua conta",
            icon: NavIcon::Shield,
            path: "/settings/security",
        },
    ],
};

const SALON_SETTINGS: SettingsSection = SettingsSection {
    title: "Meu Salão",
    items: &[
        SettingsItem {
            title: "Horários de Atendimento",
            description: "Defina os dias e horários de funcionamento",
            icon: NavIcon::Clock,
            path: "/settings/business-hours",
        },
        SettingsItem {
            title: "Métodos de Pagamento",
            description: "Configure quais formas de pagamento seu salão aceita",
            icon: NavIcon::CreditCard,
            path: "/settings/payment-methods",
        },
    ],
};

/// Settings hub sections visible to a role
pub fn settings_sections(role: Option<Role>) -> Vec<SettingsSection> {
    match role {
        Some(Role::SalonOperator) => vec![GENERAL_SETTINGS, SALON_SETTINGS],
        Some(Role::Client) | None => vec![GENERAL_SETTINGS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: &[NavEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.path).collect()
    }

    #[test]
    fn client_table_is_ordered() {
        assert_eq!(
            paths(entries_for(Some(Role::Client))),
            ["/", "/search", "/services", "/appointments"]
        );
    }

    #[test]
    fn salon_table_exposes_management_pages() {
        assert_eq!(
            paths(entries_for(Some(Role::SalonOperator))),
            ["/", "/appointments", "/salon/services", "/team"]
        );
    }

    #[test]
    fn missing_identity_uses_client_table() {
        assert_eq!(entries_for(None), entries_for(Some(Role::Client)));
    }

    #[test]
    fn active_entry_covers_account_links() {
        let entry = active_entry(Some(Role::Client), "/settings").unwrap();
        assert_eq!(entry.label, "Configurações");
        assert!(active_entry(Some(Role::Client), "/team").is_none());
    }

    #[test]
    fn salon_settings_only_for_operators() {
        assert_eq!(settings_sections(Some(Role::Client)).len(), 1);
        let sections = settings_sections(Some(Role::SalonOperator));
        assert_eq!(sections.len(), 2);
        assert!(sections[1]
            .items
            .iter()
            .any(|item| item.path == "/settings/business-hours"));
    }
}
