//! Placeholders shown instead of the listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text::{ERROR_TITLE, LOAD_ERROR, LOADING, RETRY};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class=css::status role="status">
            <span class=format!("{} {}", css::statusIcon, css::spinning)>
                <Icon icon=ic::SYNC />
            </span>
            <p class=css::statusText>{LOADING}</p>
        </div>
    }
}

/// Load failure with a retry that reloads the whole app.
#[component]
pub fn ErrorView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let message = move || {
        ctx.browser
            .with(|b| b.error().unwrap_or(LOAD_ERROR).to_string())
    };

    view! {
        <div class=css::status role="alert">
            <span class=format!("{} {}", css::statusIcon, css::statusIconError)>
                <Icon icon=ic::OFFLINE />
            </span>
            <h2 class=css::statusTitle>{ERROR_TITLE}</h2>
            <p class=css::statusText>{message}</p>
            <button class=css::retryButton on:click=move |_| dom::reload_page()>
                <Icon icon=ic::SYNC />
                <span>{RETRY}</span>
            </button>
        </div>
    }
}
