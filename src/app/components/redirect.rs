//! Client-side redirect.

use dioxus::prelude::*;

use crate::app::Route;

/// Replace the current history entry with `to` once mounted. Renders nothing.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx! {}
}
