//! SalãoZap web entry point
//!
//! Built with `dx serve --features web` / `dx build --features web`.

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::DEBUG) {
        eprintln!("Failed to initialize logger: {e}");
    }

    tracing::info!(
        "Starting SalãoZap v{} ({})",
        env!("SALAOZAP_VERSION"),
        env!("SALAOZAP_GIT_SHA")
    );

    dioxus::launch(salaozap::app::App);
}
