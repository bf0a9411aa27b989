//! SalãoZap - salon booking client
//!
//! A browser app for two kinds of users: clients who find salons and book
//! services, and salon operators who manage their catalog, team and hours.
//!
//! This library provides:
//! - Session store with persisted identity and theme
//! - Access gate deciding whether a route renders, waits or redirects
//! - Role-aware navigation tables
//! - Booking selection relay between the browse and booking pages
//! - Catalog, form validation and settings models
//! - Dioxus web UI (routes, layout, pages)

pub mod app;
pub mod catalog;
pub mod config;
pub mod forms;
pub mod gate;
pub mod nav;
pub mod preferences;
pub mod relay;
pub mod schedule;
pub mod session;
pub mod storage;
