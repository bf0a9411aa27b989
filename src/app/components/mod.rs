//! Shared UI components for the Dioxus web UI.

pub mod form_inputs;
pub mod layout;
pub mod nav;
pub mod redirect;
pub mod splash;
pub mod toaster;

pub use form_inputs::{SelectInput, TextField, ToggleInput};
pub use layout::{Layout, PageHeader};
pub use nav::Nav;
pub use redirect::Redirect;
pub use splash::SplashScreen;
pub use toaster::Toaster;
