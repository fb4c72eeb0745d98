//! Search input shown under the header.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text::SEARCH_PLACEHOLDER;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<Input>::new();

    // Focus once the input is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let query = move || ctx.browser.with(|b| b.query().to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ctx.browser.update(|b| b.set_query(value));
    };

    view! {
        <div class=css::searchBar>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                node_ref=input_ref
                class=css::searchInput
                type="search"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=query
                on:input=on_input
            />
        </div>
    }
}
