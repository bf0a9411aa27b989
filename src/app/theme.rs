//! Theme application to the document root.
//!
//! The session owns the persisted preference; this module only mirrors it
//! onto `<html>` as a `theme-light` / `theme-dark` class.

use crate::session::ThemePreference;

/// Apply the theme class to `<html>`. No-op outside the browser.
pub fn apply_theme_to_dom(theme: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(root) = document.document_element() {
                    // Remove all theme classes
                    let _ = root.class_list().remove_2("theme-light", "theme-dark");
                    let _ = root.class_list().add_1(theme.css_class());
                }
            }
        }
    }

    tracing::debug!("Theme applied: {}", theme.as_str());
}

/// Whether the browser asks for a dark color scheme. Light on native.
pub fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
                return query.matches();
            }
        }
    }

    false
}
