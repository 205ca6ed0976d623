//! Browser Dialogs

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
