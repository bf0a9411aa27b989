//! Page components, one per route.
//!
//! Pages never branch on the user's role: role-dependent content comes from
//! the navigation tables and the access gate.

mod appearance;
mod appointments;
mod auth;
mod business_hours;
mod dashboard;
mod home;
mod not_found;
mod notifications;
mod payment_methods;
mod profile;
mod salon_search;
mod salon_services;
mod security;
mod services;
mod settings;
mod team;
mod unauthorized;

pub use appearance::Appearance;
pub use appointments::Appointments;
pub use business_hours::BusinessHours;
pub use home::Home;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use payment_methods::PaymentMethods;
pub use profile::Profile;
pub use salon_search::SalonSearch;
pub use salon_services::SalonServices;
pub use security::Security;
pub use services::{Explore, Services};
pub use settings::Settings;
pub use team::TeamMembers;
pub use unauthorized::Unauthorized;
