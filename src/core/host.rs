//! Host platform capabilities.
//!
//! The Mini-App host owns the window chrome: a native back button, haptic
//! feedback and theme colors. The browser talks to it only through
//! [`HostShim`], so it runs the same inside the host, in a plain browser tab
//! ([`NoopHost`]) and in tests. Every call is best-effort.

use std::rc::Rc;

use crate::config::HEADER_COLOR_KEY;
use crate::core::browser::BackOutcome;

/// Strength of an impact haptic. Only the light tap is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
}

impl ImpactStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
        }
    }
}

/// Kind of a notification haptic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

/// Handler invoked by the native back button.
pub type BackHandler = Rc<dyn Fn()>;

/// Chrome and feedback offered by the embedding platform.
///
/// Implementations swallow their own failures.
pub trait HostShim {
    /// Tell the host the app is ready to be shown.
    fn ready(&self);
    /// Ask for the full-height viewport.
    fn expand(&self);
    /// Set the header color from a theme key.
    fn set_header_color(&self, color_key: &str);

    /// Whether the host draws its own back button. When it does not, the app
    /// renders one in its header.
    fn has_native_back_button(&self) -> bool;
    fn back_button_show(&self);
    fn back_button_hide(&self);
    /// Registers `handler`, replacing any previous one.
    fn back_button_on_click(&self, handler: BackHandler);
    /// Unregisters the current handler, if any.
    fn back_button_off_click(&self);

    fn impact_occurred(&self, style: ImpactStyle);
    fn notification_occurred(&self, kind: NotificationKind);
}

/// Host used outside the Mini-App container.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl HostShim for NoopHost {
    fn ready(&self) {}
    fn expand(&self) {}
    fn set_header_color(&self, _color_key: &str) {}
    fn has_native_back_button(&self) -> bool {
        false
    }
    fn back_button_show(&self) {}
    fn back_button_hide(&self) {}
    fn back_button_on_click(&self, _handler: BackHandler) {}
    fn back_button_off_click(&self) {}
    fn impact_occurred(&self, _style: ImpactStyle) {}
    fn notification_occurred(&self, _kind: NotificationKind) {}
}

/// Startup handshake with the host.
pub fn init_host(host: &dyn HostShim) {
    host.ready();
    host.expand();
    host.set_header_color(HEADER_COLOR_KEY);
}

/// Makes the native back button match the browser state.
///
/// The previous handler is always removed first so exactly one is registered.
pub fn sync_back_button(host: &dyn HostShim, visible: bool, handler: BackHandler) {
    if !host.has_native_back_button() {
        return;
    }
    host.back_button_off_click();
    if visible {
        host.back_button_show();
        host.back_button_on_click(handler);
    } else {
        host.back_button_hide();
    }
}

/// Haptic for a Back press: a light tap when it changed something.
pub fn back_feedback(host: &dyn HostShim, outcome: BackOutcome) {
    match outcome {
        BackOutcome::ClearedSelection | BackOutcome::LeftFolder => {
            host.impact_occurred(ImpactStyle::Light)
        }
        BackOutcome::AtRoot => {}
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Host double that records every call.
    #[derive(Default)]
    pub struct RecordingHost {
        pub native_back: bool,
        pub calls: RefCell<Vec<String>>,
        pub handler: RefCell<Option<BackHandler>>,
    }

    impl RecordingHost {
        pub fn native() -> Self {
            Self {
                native_back: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    impl HostShim for RecordingHost {
        fn ready(&self) {
            self.record("ready");
        }
        fn expand(&self) {
            self.record("expand");
        }
        fn set_header_color(&self, color_key: &str) {
            self.record(format!("header:{color_key}"));
        }
        fn has_native_back_button(&self) -> bool {
            self.native_back
        }
        fn back_button_show(&self) {
            self.record("back:show");
        }
        fn back_button_hide(&self) {
            self.record("back:hide");
        }
        fn back_button_on_click(&self, handler: BackHandler) {
            self.record("back:on");
            *self.handler.borrow_mut() = Some(handler);
        }
        fn back_button_off_click(&self) {
            self.record("back:off");
            *self.handler.borrow_mut() = None;
        }
        fn impact_occurred(&self, style: ImpactStyle) {
            self.record(format!("impact:{}", style.as_str()));
        }
        fn notification_occurred(&self, kind: NotificationKind) {
            self.record(format!("notify:{}", kind.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::testing::RecordingHost;
    use super::*;

    #[test]
    fn test_init_host_handshake() {
        let host = RecordingHost::native();
        init_host(&host);
        assert_eq!(host.calls(), ["ready", "expand", "header:secondary_bg_color"]);
    }

    #[test]
    fn test_sync_back_button_registers_single_handler() {
        let host = RecordingHost::native();
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        let handler: BackHandler = Rc::new(move || counter.set(counter.get() + 1));

        sync_back_button(&host, true, handler.clone());
        sync_back_button(&host, true, handler);
        assert_eq!(
            host.calls(),
            ["back:off", "back:show", "back:on", "back:off", "back:show", "back:on"]
        );

        let registered = host.handler.borrow().clone().expect("handler registered");
        registered();
        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_sync_back_button_hides_at_root() {
        let host = RecordingHost::native();
        sync_back_button(&host, false, Rc::new(|| {}));
        assert_eq!(host.calls(), ["back:off", "back:hide"]);
        assert!(host.handler.borrow().is_none());
    }

    #[test]
    fn test_sync_back_button_skipped_without_native_chrome() {
        let host = RecordingHost::default();
        sync_back_button(&host, true, Rc::new(|| {}));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_back_feedback_only_when_something_changed() {
        let host = RecordingHost::native();
        back_feedback(&host, BackOutcome::ClearedSelection);
        back_feedback(&host, BackOutcome::LeftFolder);
        assert_eq!(host.calls(), ["impact:light", "impact:light"]);

        let idle = RecordingHost::native();
        back_feedback(&idle, BackOutcome::AtRoot);
        assert!(idle.calls().is_empty());
    }
}
