//! Session state for the signed-in user.
//!
//! - [`Identity`]: the principal, with its immutable [`Role`]
//! - [`ThemePreference`]: light/dark, independent of the identity lifecycle
//! - [`SessionStore`]: in-memory session mirrored to a [`crate::storage::KeyValueStore`]

mod identity;
mod store;

pub use identity::{Identity, Role, ThemePreference};
pub use store::SessionStore;
