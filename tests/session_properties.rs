//! Session, gate and relay behavior through the public API.
//!
//! Everything runs against `MemoryStore`, the same store the native build
//! uses in place of `localStorage`.

use salaozap::catalog;
use salaozap::gate::{self, Access, GateDecision, RedirectTarget};
use salaozap::relay::{BookingRelay, BookingSelection};
use salaozap::session::{Identity, Role, SessionStore, ThemePreference};
use salaozap::storage::{keys, MemoryStore};

fn identity(role: Role) -> Identity {
    Identity::new("u1", "Ana", "a@x.com", role)
}

fn ready_session(store: &MemoryStore) -> SessionStore<MemoryStore> {
    let mut session = SessionStore::new(store.clone());
    session.initialize();
    session
}

#[test]
fn logout_clears_identity_for_every_role() {
    for role in Role::ALL {
        let store = MemoryStore::new();
        let mut session = ready_session(&store);
        session.login(identity(role));
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.identity(), None);
        assert!(!store.contains(keys::IDENTITY));
    }
}

#[test]
fn login_round_trips_identity() {
    let store = MemoryStore::new();
    let mut session = ready_session(&store);
    let supplied = Identity::new("c-42", "Bruna Costa", "bruna@example.com", Role::Client);

    session.login(supplied.clone());
    assert_eq!(session.identity(), Some(&supplied));

    // And survives a reload from the same storage
    let reloaded = ready_session(&store);
    assert_eq!(reloaded.identity(), Some(&supplied));
}

#[test]
fn theme_survives_logout() {
    let store = MemoryStore::new();
    let mut session = ready_session(&store);

    session.set_theme(ThemePreference::Dark);
    session.login(identity(Role::Client));
    session.logout();

    assert_eq!(session.theme(), ThemePreference::Dark);
    assert_eq!(ready_session(&store).theme(), ThemePreference::Dark);
}

#[test]
fn gate_is_idempotent() {
    let store = MemoryStore::new();
    let mut session = ready_session(&store);
    session.login(identity(Role::Client));

    for access in [Access::Public, Access::Authenticated, Access::SALON_ONLY] {
        assert_eq!(session.gate(access), session.gate(access));
    }
}

#[test]
fn client_is_kept_out_of_salon_tools() {
    let store = MemoryStore::new();
    let mut session = ready_session(&store);
    session.login(identity(Role::Client));

    assert_eq!(
        session.gate(Access::SALON_ONLY),
        GateDecision::Redirect(RedirectTarget::Unauthorized)
    );
    assert_eq!(session.gate(Access::CLIENT_ONLY), GateDecision::Render);
}

#[test]
fn gate_waits_for_initialization() {
    let session = SessionStore::new(MemoryStore::new());
    assert_eq!(session.gate(Access::Authenticated), GateDecision::Loading);
    assert_eq!(
        gate::evaluate(false, None, Access::Authenticated),
        GateDecision::Redirect(RedirectTarget::Login)
    );
}

#[test]
fn relay_hands_over_once() {
    let relay = BookingRelay::new(MemoryStore::new());
    let picked = BookingSelection::Service(catalog::services().remove(2));

    relay.publish(&picked).expect("publish selection");

    assert_eq!(relay.consume_if_present(), Some(picked));
    assert_eq!(relay.consume_if_present(), None);
}

#[test]
fn empty_storage_initializes_signed_out() {
    let mut session = SessionStore::new(MemoryStore::new());
    assert!(session.is_loading());

    session.initialize();

    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    assert_eq!(session.theme(), ThemePreference::Light);
}

#[test]
fn seeded_storage_restores_operator_and_theme() {
    let store = MemoryStore::seeded([
        (
            keys::IDENTITY,
            r#"{"id":"u1","name":"Ana","email":"a@x.com","role":"salon-operator"}"#,
        ),
        (keys::THEME, "dark"),
    ]);

    let session = ready_session(&store);

    assert_eq!(session.role(), Some(Role::SalonOperator));
    assert_eq!(session.theme(), ThemePreference::Dark);
    assert_eq!(session.gate(Access::SALON_ONLY), GateDecision::Render);
}
