//! Browser timer as a future.

/// Resolve after `ms` milliseconds via `setTimeout`. Resolves immediately
/// outside the browser.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u64) {}
