//! Session context shared by every component.
//!
//! Wraps the [`SessionStore`] in a signal so reads subscribe components and
//! mutations re-render them. The store is backed by `localStorage` in the
//! browser and by an in-memory map elsewhere.

use dioxus::prelude::*;

use crate::app::theme;
use crate::gate::{Access, GateDecision};
use crate::session::{Identity, Role, SessionStore, ThemePreference};
use crate::storage::{browser_store, BrowserStore, StorageArea};

/// Global session state shared via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: Signal<SessionStore<BrowserStore>>,
}

impl SessionContext {
    /// True until the persisted session has been read
    pub fn is_loading(&self) -> bool {
        self.store.read().is_loading()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.store.read().identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.read().role()
    }

    pub fn theme(&self) -> ThemePreference {
        self.store.read().theme()
    }

    pub fn gate(&self, access: Access) -> GateDecision {
        self.store.read().gate(access)
    }

    pub fn login(&self, identity: Identity) {
        let mut store = self.store;
        let theme = {
            let mut session = store.write();
            session.login(identity);
            session.theme()
        };
        theme::apply_theme_to_dom(theme);
    }

    pub fn logout(&self) {
        let mut store = self.store;
        store.write().logout();
    }

    /// Set, persist and apply the theme
    pub fn set_theme(&self, theme: ThemePreference) {
        let mut store = self.store;
        store.write().set_theme(theme);
        theme::apply_theme_to_dom(theme);
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider() -> SessionContext {
    let mut store = use_signal(|| SessionStore::new(browser_store(StorageArea::Local)));

    let ctx = SessionContext { store };
    use_context_provider(|| ctx);

    // Single startup read from storage, then apply the restored theme
    use_effect(move || {
        let theme = {
            let mut session = store.write();
            session.initialize();
            session.theme()
        };
        theme::apply_theme_to_dom(theme);
    });

    ctx
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
