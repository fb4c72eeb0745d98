//! Telegram WebApp bridge.
//!
//! Implements [`HostShim`] on top of `window.Telegram.WebApp`. Hosts older
//! than [`MIN_NATIVE_CHROME_VERSION`] get no back button or haptic calls; the
//! app draws its own back button instead.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use crate::config::{FALLBACK_HOST_VERSION, MIN_NATIVE_CHROME_VERSION};
use crate::core::host::{BackHandler, HostShim, ImpactStyle, NotificationKind};
use crate::utils::dom::{js_call, js_get, window};

/// Whether a reported host version supports native chrome.
pub fn supports_native_chrome(version: Option<&str>) -> bool {
    let version = version
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(FALLBACK_HOST_VERSION);
    version >= MIN_NATIVE_CHROME_VERSION
}

/// Host shim for the Telegram Mini-App container.
pub struct TelegramHost {
    web_app: JsValue,
    native_chrome: bool,
    back_handler: RefCell<Option<Closure<dyn Fn()>>>,
}

impl TelegramHost {
    /// Binds to `window.Telegram.WebApp` if the page runs inside Telegram.
    pub fn detect() -> Option<Self> {
        let window: JsValue = window()?.into();
        let web_app = js_get(&window, "Telegram").and_then(|tg| js_get(&tg, "WebApp"))?;
        let version = js_get(&web_app, "version").and_then(|v| v.as_string());

        Some(Self {
            native_chrome: supports_native_chrome(version.as_deref()),
            web_app,
            back_handler: RefCell::new(None),
        })
    }

    fn back_button(&self) -> Option<JsValue> {
        if !self.native_chrome {
            return None;
        }
        js_get(&self.web_app, "BackButton")
    }

    fn haptics(&self) -> Option<JsValue> {
        if !self.native_chrome {
            return None;
        }
        js_get(&self.web_app, "HapticFeedback")
    }
}

impl HostShim for TelegramHost {
    fn ready(&self) {
        js_call(&self.web_app, "ready", &[]);
    }

    fn expand(&self) {
        js_call(&self.web_app, "expand", &[]);
    }

    fn set_header_color(&self, color_key: &str) {
        js_call(&self.web_app, "setHeaderColor", &[JsValue::from_str(color_key)]);
    }

    fn has_native_back_button(&self) -> bool {
        self.back_button().is_some()
    }

    fn back_button_show(&self) {
        if let Some(button) = self.back_button() {
            js_call(&button, "show", &[]);
        }
    }

    fn back_button_hide(&self) {
        if let Some(button) = self.back_button() {
            js_call(&button, "hide", &[]);
        }
    }

    fn back_button_on_click(&self, handler: BackHandler) {
        let Some(button) = self.back_button() else {
            return;
        };
        self.back_button_off_click();

        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);
        let function: &JsValue = closure.as_ref();
        js_call(&button, "onClick", std::slice::from_ref(function));
        *self.back_handler.borrow_mut() = Some(closure);
    }

    fn back_button_off_click(&self) {
        let Some(closure) = self.back_handler.borrow_mut().take() else {
            return;
        };
        if let Some(button) = self.back_button() {
            let function: &JsValue = closure.as_ref();
            js_call(&button, "offClick", std::slice::from_ref(function));
        }
    }

    fn impact_occurred(&self, style: ImpactStyle) {
        if let Some(haptics) = self.haptics() {
            js_call(&haptics, "impactOccurred", &[JsValue::from_str(style.as_str())]);
        }
    }

    fn notification_occurred(&self, kind: NotificationKind) {
        if let Some(haptics) = self.haptics() {
            js_call(
                &haptics,
                "notificationOccurred",
                &[JsValue::from_str(kind.as_str())],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_native_chrome() {
        assert!(supports_native_chrome(Some("6.1")));
        assert!(supports_native_chrome(Some("7.0")));
        assert!(!supports_native_chrome(Some("6.0")));
        assert!(!supports_native_chrome(Some("garbage")));
        assert!(!supports_native_chrome(None));
    }
}
