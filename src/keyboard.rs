//! On-Screen Keyboard
//!
//! The webview shows the soft keyboard while a text field has focus, so
//! dismissing it means blurring the focused element.

use wasm_bindgen::JsCast;

/// Blur whatever element currently holds focus
pub fn dismiss() {
    let Some(active) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element())
    else {
        return;
    };

    match active.dyn_into::<web_sys::HtmlElement>() {
        Ok(element) => {
            if let Err(e) = element.blur() {
                log::warn!("[KEYBOARD] Failed to blur focused element: {:?}", e);
            }
        }
        Err(_) => log::debug!("[KEYBOARD] Focused element is not an HtmlElement"),
    }
}
