//! Blocking browser dialogs

/// Shows a blocking `window.alert`; silently does nothing outside a browser.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
