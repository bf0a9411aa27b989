//! Dioxus web application.
//!
//! The root component installs the shared contexts (session, booking relay,
//! toasts, config) and mounts the router. Every protected route sits under the
//! [`Guarded`] layout, which asks the access gate whether to render, wait or
//! redirect.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod relay_context;
pub mod session_context;
pub mod theme;
pub mod timer;
pub mod toast;

use crate::config::{load_config, AppConfig};
use crate::gate::{Access, GateDecision, RedirectTarget};
use components::{Layout, Redirect, SplashScreen, Toaster};
use pages::{
    Appearance, Appointments, BusinessHours, Explore, Home, NotFound, Notifications,
    PaymentMethods, Profile, SalonSearch, SalonServices, Security, Services, Settings,
    TeamMembers, Unauthorized,
};
use relay_context::use_relay_provider;
use session_context::{use_session, use_session_provider};
use toast::use_toast_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Config first: the splash and login screens read it
    use_context_provider(|| {
        load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        })
    });

    // Session restores identity + theme from localStorage on mount
    use_session_provider();
    use_relay_provider();
    use_toast_provider();

    rsx! {
        Router::<Route> {}
        Toaster {}
    }
}

/// Get the app config - use in any component
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(Guarded)]
        #[route("/services")]
        Services {},
        #[route("/search")]
        SalonSearch {},
        #[route("/explore")]
        Explore {},
        #[route("/appointments")]
        Appointments {},
        #[route("/profile")]
        Profile {},
        #[route("/salon/services")]
        SalonServices {},
        #[route("/team")]
        TeamMembers {},
        #[route("/settings")]
        Settings {},
        #[route("/settings/appearance")]
        Appearance {},
        #[route("/settings/business-hours")]
        BusinessHours {},
        #[route("/settings/payment-methods")]
        PaymentMethods {},
        #[route("/settings/notifications")]
        Notifications {},
        #[route("/settings/security")]
        Security {},
    #[end_layout]
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Who may open this route
    pub fn access(&self) -> Access {
        match self {
            Route::Home {} | Route::Unauthorized {} | Route::NotFound { .. } => Access::Public,
            Route::SalonServices {}
            | Route::TeamMembers {}
            | Route::BusinessHours {}
            | Route::PaymentMethods {} => Access::SALON_ONLY,
            Route::Services {}
            | Route::SalonSearch {}
            | Route::Explore {}
            | Route::Appointments {}
            | Route::Profile {}
            | Route::Settings {}
            | Route::Appearance {}
            | Route::Notifications {}
            | Route::Security {} => Access::Authenticated,
        }
    }

    /// Resolve a navigation-table path. Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Route {
        path.parse::<Route>().unwrap_or(Route::Home {})
    }
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Route::Home {},
            RedirectTarget::Unauthorized => Route::Unauthorized {},
        }
    }
}

/// Layout for every protected route: the gate decides what is shown.
#[component]
fn Guarded() -> Element {
    let session = use_session();
    let route = use_route::<Route>();

    match session.gate(route.access()) {
        GateDecision::Loading => rsx! { SplashScreen {} },
        GateDecision::Redirect(target) => {
            tracing::debug!("Access to {} denied, redirecting to {:?}", route, target);
            rsx! { Redirect { to: Route::from(target) } }
        }
        GateDecision::Render => rsx! {
            Layout {
                Outlet::<Route> {}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn operator_tools_are_salon_only() {
        for route in [
            Route::SalonServices {},
            Route::TeamMembers {},
            Route::BusinessHours {},
            Route::PaymentMethods {},
        ] {
            assert_eq!(route.access(), Access::SALON_ONLY, "{route}");
            assert!(!route.access().permits(Role::Client));
        }
    }

    #[test]
    fn entry_pages_are_public() {
        assert_eq!(Route::Home {}.access(), Access::Public);
        assert_eq!(Route::Unauthorized {}.access(), Access::Public);
        let missing = Route::from_path("/does/not/exist");
        assert_eq!(missing.access(), Access::Public);
    }

    #[test]
    fn nav_paths_resolve_to_routes() {
        assert_eq!(Route::from_path("/team"), Route::TeamMembers {});
        assert_eq!(Route::from_path("/settings/appearance"), Route::Appearance {});
        assert_eq!(Route::from_path("/"), Route::Home {});
    }

    #[test]
    fn explore_is_open_to_every_signed_in_role() {
        let explore = Route::from_path("/explore");
        assert_eq!(explore, Route::Explore {});
        assert_eq!(explore.access(), Access::Authenticated);
        assert!(explore.access().permits(Role::Client));
    }

    #[test]
    fn redirect_targets_map_to_entry_pages() {
        assert_eq!(Route::from(RedirectTarget::Login), Route::Home {});
        assert_eq!(Route::from(RedirectTarget::Unauthorized), Route::Unauthorized {});
    }
}
