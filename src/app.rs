//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! application-level effects that keep the listing and the host chrome in
//! sync with the browser state.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::KnowledgeBase;
use crate::config::ROOT_FOLDER_ID;
use crate::core::host::BackHandler;
use crate::core::{
    BrowserState, HostShim, NoopHost, Provider, StateCell, TransferState, back_feedback,
    copy_text, download, folder_changed, init_host, load_folder, sync_back_button,
};
use crate::models::DriveItem;
use crate::utils::{BrowserFiles, TelegramHost, dom};

// ============================================================================
// Signal-backed state
// ============================================================================

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by the screen
/// components through `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy`: signals and stored values are handles into the
/// reactive arena.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation, selection, listing and search.
    pub browser: RwSignal<BrowserState>,
    /// Download and copy flags of the file view.
    pub transfer: RwSignal<TransferState>,
    host: StoredValue<Rc<dyn HostShim>, LocalStorage>,
    provider: StoredValue<Provider>,
}

impl AppContext {
    /// Context rooted at the configured folder, bound to the detected host.
    pub fn new(provider: Provider) -> Self {
        let host = detect_host();
        Self {
            browser: RwSignal::new(BrowserState::new(ROOT_FOLDER_ID)),
            transfer: RwSignal::new(TransferState::default()),
            host: StoredValue::new_local(host),
            provider: StoredValue::new(provider),
        }
    }

    pub fn host(&self) -> Rc<dyn HostShim> {
        self.host.get_value()
    }

    /// Whether the header has to draw its own back button.
    pub fn needs_inline_back(&self) -> bool {
        !self.host.with_value(|host| host.has_native_back_button())
    }

    /// Back from the native button or the header.
    pub fn back(&self) {
        if let Some(outcome) = self.browser.try_update(BrowserState::back) {
            back_feedback(self.host().as_ref(), outcome);
        }
    }

    /// Tap on a listing row.
    pub fn activate(&self, item: DriveItem) {
        self.browser.update(|b| b.activate(item));
    }

    /// Fetches the listing of the active folder in the background.
    pub fn load_active_folder(&self) {
        let browser = self.browser;
        let provider = self.provider.get_value();
        spawn_local(async move {
            load_folder(&browser, &provider).await;
        });
    }

    /// Saves the previewed file to the device.
    pub fn download_selected(&self) {
        let Some(file) = self.browser.with_untracked(|b| b.selected().cloned()) else {
            return;
        };
        let transfer = self.transfer;
        let host = self.host();
        spawn_local(async move {
            download(&transfer, &BrowserFiles, host.as_ref(), &file).await;
        });
    }

    /// Copies the text of the previewed file.
    pub fn copy_selected(&self) {
        let Some(file) = self.browser.with_untracked(|b| b.selected().cloned()) else {
            return;
        };
        let transfer = self.transfer;
        let host = self.host();
        spawn_local(async move {
            copy_text(&transfer, &BrowserFiles, host.as_ref(), &file).await;
        });
    }
}

fn detect_host() -> Rc<dyn HostShim> {
    match TelegramHost::detect() {
        Some(host) => Rc::new(host),
        None => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&"Telegram WebApp not found, running standalone".into());
            Rc::new(NoopHost)
        }
    }
}

/// Wires the context, the host handshake and the effects, then renders the
/// browser.
fn start(provider: Provider) -> impl IntoView {
    let ctx = AppContext::new(provider);
    provide_context(ctx);

    init_host(ctx.host().as_ref());

    let active_path = Memo::new(move |_| ctx.browser.with(BrowserState::active_path));
    Effect::new(move |previous: Option<Vec<String>>| {
        let current = active_path.get();
        if folder_changed(previous.as_deref(), &current) {
            ctx.load_active_folder();
        }
        current
    });

    let can_go_back = Memo::new(move |_| ctx.browser.with(BrowserState::can_go_back));
    Effect::new(move |_| {
        let visible = can_go_back.get();
        let handler: BackHandler = Rc::new(move || ctx.back());
        sync_back_button(ctx.host().as_ref(), visible, handler);
    });

    view! { <KnowledgeBase /> }
}

/// Root application component with error boundary.
///
/// This component:
/// - Selects the content provider; a bundled dataset that fails to parse
///   lands in the error boundary
/// - Creates and provides the global AppContext
/// - Reloads the listing whenever the active folder changes
/// - Keeps the native back button in step with the navigation state
#[component]
pub fn App() -> impl IntoView {
    let startup = Provider::configured(ROOT_FOLDER_ID).map(start);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    text-align: center;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="margin-bottom: 1rem;">"Что-то пошло не так"</h1>
                    <ul style="margin-bottom: 2rem; list-style: none; padding: 0; opacity: 0.7;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| dom::reload_page()
                        style="
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 10px;
                            cursor: pointer;
                            font-size: 1rem;
                        "
                    >
                        "Перезагрузить"
                    </button>
                </div>
            }
        >
            {startup}
        </ErrorBoundary>
    }
}
