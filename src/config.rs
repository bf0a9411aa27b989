//! Application configuration
//!
//! Defaults are compiled in. Native builds can override them with an optional
//! `salaozap.{toml,json}` file in `SALAOZAP_CONFIG_DIR` (or the working
//! directory) and `SALAOZAP_*` environment variables, e.g.
//! `SALAOZAP_SPLASH_DURATION_MS=500`.

use serde::Deserialize;

use crate::session::{Identity, Role};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_brand")]
    pub brand: String,

    /// How long the intro screen stays up
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,

    #[serde(default = "default_demo_accounts")]
    pub demo_accounts: Vec<DemoAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            splash_duration_ms: default_splash_duration_ms(),
            demo_accounts: default_demo_accounts(),
        }
    }
}

impl AppConfig {
    /// Demo account matching the submitted credentials (email is case-insensitive)
    pub fn demo_account(&self, email: &str, password: &str) -> Option<&DemoAccount> {
        self.demo_accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
    }
}

/// Fixed credentials that sign in as a prepared identity
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub identity: Identity,
}

fn default_brand() -> String {
    "SalãoZap".to_string()
}

fn default_splash_duration_ms() -> u64 {
    2000
}

fn default_demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            email: "cliente@salaozap.com".into(),
            password: "demo123".into(),
            identity: Identity::new("demo-client", "Maria Souza", "cliente@salaozap.com", Role::Client),
        },
        DemoAccount {
            email: "salao@salaozap.com".into(),
            password: "demo123".into(),
            identity: Identity::new(
                "demo-salon",
                "Salão Beleza Natural",
                "salao@salaozap.com",
                Role::SalonOperator,
            ),
        },
    ]
}

/// Get config directory (SALAOZAP_CONFIG_DIR or the working directory)
#[cfg(not(target_arch = "wasm32"))]
pub fn get_config_dir() -> std::path::PathBuf {
    std::env::var("SALAOZAP_CONFIG_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        .add_source(
            ::config::File::with_name(&config_dir.join("salaozap").to_string_lossy())
                .required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("SALAOZAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    tracing::debug!(
        "Configuration loaded: {} demo account(s), splash {}ms",
        app_config.demo_accounts.len(),
        app_config.splash_duration_ms
    );
    Ok(app_config)
}

/// The browser has no config files or environment: compiled defaults apply.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> anyhow::Result<AppConfig> {
    Ok(AppConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn defaults_include_one_account_per_role() {
        let config = AppConfig::default();
        let roles: Vec<Role> = config
            .demo_accounts
            .iter()
            .map(|a| a.identity.role)
            .collect();
        assert_eq!(roles, [Role::Client, Role::SalonOperator]);
        assert_eq!(config.splash_duration_ms, 2000);
    }

    #[test]
    fn demo_account_requires_matching_password() {
        let config = AppConfig::default();
        assert!(config.demo_account("SALAO@salaozap.com ", "demo123").is_some());
        assert!(config.demo_account("salao@salaozap.com", "wrong").is_none());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"brand":"Studio"}"#).unwrap();
        assert_eq!(config.brand, "Studio");
        assert_eq!(config.demo_accounts, AppConfig::default().demo_accounts);
    }

    #[test]
    #[serial]
    fn load_config_reads_file_and_environment() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("salaozap.json"),
            r#"{"brand":"Salão Teste","splash_duration_ms":100}"#,
        )
        .expect("write config");

        env::set_var("SALAOZAP_CONFIG_DIR", temp_dir.path());
        env::set_var("SALAOZAP_SPLASH_DURATION_MS", "250");

        let config = load_config();

        env::remove_var("SALAOZAP_CONFIG_DIR");
        env::remove_var("SALAOZAP_SPLASH_DURATION_MS");

        let config = config.expect("load config");
        assert_eq!(config.brand, "Salão Teste");
        assert_eq!(config.splash_duration_ms, 250);
        assert_eq!(config.demo_accounts.len(), 2);
    }

    #[test]
    #[serial]
    fn load_config_without_sources_uses_defaults() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("SALAOZAP_CONFIG_DIR", temp_dir.path());

        let config = load_config();

        env::remove_var("SALAOZAP_CONFIG_DIR");

        assert_eq!(config.expect("load config"), AppConfig::default());
    }
}
