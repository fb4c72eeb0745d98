//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Read `target[key]`, treating `undefined` and `null` as absent.
pub fn js_get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Call `target[method](...args)` if it is a function.
pub fn js_call(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let function = js_get(target, method)?.dyn_into::<Function>().ok()?;
    let args: js_sys::Array = args.iter().collect();
    function.apply(target, &args).ok()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Reload the whole page.
pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Open a URL in a new tab or view.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

// =============================================================================
// Files and Clipboard
// =============================================================================

/// Hand a blob to the browser as a file download named `file_name`.
pub fn save_blob(blob: &Blob, file_name: &str) -> Result<(), String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or("Document not available")?;
    let body = document.body().ok_or("Document has no body")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|_| "Failed to create object URL".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into()
        .map_err(|_| "Created element is not a link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let appended = body.append_child(&anchor).is_ok();
    anchor.click();
    if appended {
        let _ = body.remove_child(&anchor);
    }
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// Write text to the system clipboard.
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    let navigator: JsValue = window().ok_or("Window not available")?.navigator().into();
    let clipboard = js_get(&navigator, "clipboard").ok_or("Clipboard API not available")?;
    let promise = js_call(&clipboard, "writeText", &[JsValue::from_str(text)])
        .and_then(|value| value.dyn_into::<Promise>().ok())
        .ok_or("Clipboard write not started")?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| "Clipboard write rejected".to_string()))
}

// =============================================================================
// Time
// =============================================================================

/// Wait for `ms` milliseconds without blocking the event loop.
pub async fn sleep(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Local wall-clock time as `HH:MM`.
pub fn local_time_hhmm() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}
