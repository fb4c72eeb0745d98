//! Screen header.
//!
//! The back button here is a fallback for hosts without native chrome; inside
//! a recent host the native one is used instead.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::BrowserState;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let title = Memo::new(move |_| ctx.browser.with(BrowserState::title));
    let inline_back = ctx.needs_inline_back();
    let show_back =
        Signal::derive(move || inline_back && ctx.browser.with(BrowserState::can_go_back));
    let show_search_toggle = Signal::derive(move || ctx.browser.with(|b| b.selected().is_none()));
    let search_open = Signal::derive(move || ctx.browser.with(BrowserState::is_search_open));

    let on_back = move |_: leptos::ev::MouseEvent| ctx.back();
    let on_toggle_search = move |_: leptos::ev::MouseEvent| {
        ctx.browser.update(BrowserState::toggle_search);
    };

    view! {
        <header class=css::header>
            <div class=css::headerSide>
                <Show when=move || show_back.get()>
                    <button class=css::iconButton on:click=on_back title="Назад">
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                </Show>
            </div>

            <h1 class=css::title>{move || title.get()}</h1>

            <div class=css::headerSide>
                <Show when=move || show_search_toggle.get()>
                    <button
                        class=move || toggle_class(search_open.get())
                        on:click=on_toggle_search
                        title="Поиск"
                        aria-pressed=move || search_open.get().to_string()
                    >
                        {move || if search_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::SEARCH /> }.into_any()
                        }}
                    </button>
                </Show>
            </div>
        </header>
    }
}

fn toggle_class(active: bool) -> String {
    if active {
        format!("{} {}", css::iconButton, css::iconButtonActive)
    } else {
        css::iconButton.to_string()
    }
}
