//! Clipboard utilities for copying text to clipboard
//!
//! Write-only access through the Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// The write is asynchronous; a rejected promise (no permission, insecure
/// context) is logged and otherwise ignored.
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard("Hello, World!");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("Clipboard unavailable: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            log::error!("Clipboard write failed: {:?}", e);
        }
    });
}
