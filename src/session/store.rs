//! Session store: who is logged in and which theme is active.

use crate::gate::{self, Access, GateDecision};
use crate::storage::{self, keys, KeyValueStore};

use super::identity::{Identity, Role, ThemePreference};

/// Current identity and theme, mirrored to durable storage.
///
/// Starts in the loading state; [`SessionStore::initialize`] performs the
/// single startup read. Storage write failures are logged and the in-memory
/// state stays authoritative.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    identity: Option<Identity>,
    theme: ThemePreference,
    loading: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            identity: None,
            theme: ThemePreference::default(),
            loading: true,
        }
    }

    /// Read the persisted identity and theme. Runs once; later calls are no-ops.
    pub fn initialize(&mut self) {
        if !self.loading {
            return;
        }

        self.identity = storage::read_json(&self.storage, keys::IDENTITY);
        if let Some(theme) = self
            .storage
            .get(keys::THEME)
            .and_then(|raw| ThemePreference::parse(&raw))
        {
            self.theme = theme;
        }
        self.loading = false;

        match &self.identity {
            Some(identity) => tracing::info!(
                "Session restored for {} ({}), theme {}",
                identity.id,
                identity.role.as_str(),
                self.theme.as_str()
            ),
            None => tracing::debug!("No stored session, theme {}", self.theme.as_str()),
        }
    }

    /// Make `identity` the current session. Always succeeds.
    pub fn login(&mut self, identity: Identity) {
        if let Some(theme) = identity.theme_preference {
            self.theme = theme;
        }
        tracing::info!("Login {} as {}", identity.id, identity.role.as_str());
        self.identity = Some(identity);
        self.persist_identity();
        self.persist_theme();
    }

    /// Clear the identity from memory and storage. The theme is kept.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!("Logout {}", identity.id);
        }
        if let Err(e) = self.storage.remove(keys::IDENTITY) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }

    /// Change the active theme, recording it on the current identity too.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.persist_theme();
        if let Some(identity) = self.identity.as_mut() {
            identity.theme_preference = Some(theme);
            self.persist_identity();
        }
        tracing::debug!("Theme set to {}", theme.as_str());
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Gate decision for a destination with the given access requirement
    pub fn gate(&self, access: Access) -> GateDecision {
        gate::evaluate(self.loading, self.role(), access)
    }

    fn persist_identity(&self) {
        let Some(identity) = &self.identity else {
            return;
        };
        if let Err(e) = storage::write_json(&self.storage, keys::IDENTITY, identity) {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    fn persist_theme(&self) {
        if let Err(e) = self.storage.set(keys::THEME, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::RedirectTarget;
    use crate::storage::{FailingStore, MemoryStore};

    fn ana() -> Identity {
        Identity::new("u1", "Ana", "a@x.com", Role::SalonOperator)
    }

    fn loaded(storage: MemoryStore) -> SessionStore<MemoryStore> {
        let mut session = SessionStore::new(storage);
        session.initialize();
        session
    }

    #[test]
    fn starts_loading_until_initialized() {
        let mut session = SessionStore::new(MemoryStore::new());
        assert!(session.is_loading());
        assert_eq!(session.gate(Access::Authenticated), GateDecision::Loading);
        session.initialize();
        assert!(!session.is_loading());
    }

    #[test]
    fn initialize_runs_once() {
        let storage = MemoryStore::new();
        let mut session = loaded(storage.clone());
        // Data written behind the store's back after startup is not re-read
        storage::write_json(&storage, keys::IDENTITY, &ana()).unwrap();
        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_identity_and_theme() {
        let storage = MemoryStore::new();
        let mut session = loaded(storage.clone());
        session.login(ana());

        let stored: Identity = storage::read_json(&storage, keys::IDENTITY).unwrap();
        assert_eq!(stored, ana());
        assert_eq!(storage.get(keys::THEME).as_deref(), Some("light"));
    }

    #[test]
    fn login_applies_identity_theme_or_keeps_current() {
        let mut session = loaded(MemoryStore::new());
        session.set_theme(ThemePreference::Dark);
        session.login(ana());
        assert_eq!(session.theme(), ThemePreference::Dark);

        session.logout();
        session.login(ana().with_theme(ThemePreference::Light));
        assert_eq!(session.theme(), ThemePreference::Light);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = MemoryStore::new();
        let mut session = loaded(storage.clone());
        session.login(ana());
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(!storage.contains(keys::IDENTITY));
    }

    #[test]
    fn set_theme_updates_logged_in_identity() {
        let storage = MemoryStore::new();
        let mut session = loaded(storage.clone());
        session.login(ana());
        session.set_theme(ThemePreference::Dark);

        assert_eq!(
            session.identity().and_then(|i| i.theme_preference),
            Some(ThemePreference::Dark)
        );
        let stored: Identity = storage::read_json(&storage, keys::IDENTITY).unwrap();
        assert_eq!(stored.theme_preference, Some(ThemePreference::Dark));
        assert_eq!(storage.get(keys::THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn set_theme_without_identity_stores_theme_only() {
        let storage = MemoryStore::new();
        let mut session = loaded(storage.clone());
        session.set_theme(ThemePreference::Dark);
        assert!(!storage.contains(keys::IDENTITY));
        assert_eq!(storage.get(keys::THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_stored_identity_yields_empty_session() {
        let storage = MemoryStore::seeded([(keys::IDENTITY, "{\"id\":"), (keys::THEME, "neon")]);
        let session = loaded(storage);
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.theme(), ThemePreference::Light);
    }

    #[test]
    fn gate_follows_session_state() {
        let mut session = loaded(MemoryStore::new());
        assert_eq!(
            session.gate(Access::Authenticated),
            GateDecision::Redirect(RedirectTarget::Login)
        );
        session.login(Identity::new("c1", "Maria", "m@x.com", Role::Client));
        assert_eq!(
            session.gate(Access::SALON_ONLY),
            GateDecision::Redirect(RedirectTarget::Unauthorized)
        );
        assert_eq!(session.gate(Access::Authenticated), GateDecision::Render);
    }

    #[test]
    fn unwritable_storage_keeps_session_in_memory() {
        let mut session = SessionStore::new(FailingStore);
        session.initialize();

        session.login(ana());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::SalonOperator));
        assert_eq!(session.gate(Access::SALON_ONLY), GateDecision::Render);

        session.set_theme(ThemePreference::Dark);
        assert_eq!(session.theme(), ThemePreference::Dark);
        assert_eq!(
            session.identity().and_then(|i| i.theme_preference),
            Some(ThemePreference::Dark)
        );

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.theme(), ThemePreference::Dark);
    }
}
