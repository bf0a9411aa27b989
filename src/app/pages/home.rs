//! Entry route: intro splash, then the auth screen or the dashboard.

use dioxus::prelude::*;

use crate::app::components::{Layout, SplashScreen};
use crate::app::session_context::use_session;
use crate::app::timer::sleep_ms;
use crate::app::use_app_config;
use crate::storage::{browser_store, IntroFlag, StorageArea};

use super::auth::AuthScreen;
use super::dashboard::Dashboard;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let config = use_app_config();

    // First visit in this tab shows the intro for the configured duration
    let first_visit = use_hook(|| IntroFlag::new(browser_store(StorageArea::Session)).claim());
    let mut showing_intro = use_signal(move || first_visit);

    let duration = config.splash_duration_ms;
    use_future(move || async move {
        if first_visit {
            sleep_ms(duration).await;
            showing_intro.set(false);
        }
    });

    if showing_intro() || session.is_loading() {
        return rsx! { SplashScreen {} };
    }

    match session.identity() {
        Some(identity) => rsx! {
            Layout {
                Dashboard { identity }
            }
        },
        None => rsx! { AuthScreen {} },
    }
}
