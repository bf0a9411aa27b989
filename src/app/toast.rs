//! Transient notifications.
//!
//! One list of toasts shared via context. The newest few are kept; each can
//! be dismissed and otherwise disappears after [`TOAST_DURATION_MS`].

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::app::timer::sleep_ms;
use crate::forms::ValidationError;

pub const TOAST_DURATION_MS: u64 = 4000;
const MAX_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

/// Global toast list shared via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), false);
    }

    /// Destructive toast for a rejected form
    pub fn error(&self, error: &ValidationError) {
        self.push(error.title().to_string(), error.to_string(), true);
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    pub fn list(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    fn push(&self, title: String, description: String, destructive: bool) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;

        let id = *next_id.peek();
        next_id.set(id + 1);

        push_capped(
            &mut toasts.write(),
            Toast {
                id,
                title,
                description,
                destructive,
            },
        );

        let ctx = *self;
        spawn_forever(async move {
            sleep_ms(TOAST_DURATION_MS).await;
            ctx.dismiss(id);
        });
    }
}

/// Append, dropping the oldest entries beyond [`MAX_TOASTS`]
fn push_capped(list: &mut Vec<Toast>, toast: Toast) {
    list.push(toast);
    let overflow = list.len().saturating_sub(MAX_TOASTS);
    list.drain(..overflow);
}

/// Initialize toast context provider - call once at app root
pub fn use_toast_provider() -> ToastContext {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);
    use_context_provider(|| ToastContext { toasts, next_id })
}

/// Get toast context - use in any component
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
