//! Folder listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text::EMPTY_FOLDER;
use crate::models::DriveItem;

stylance::import_crate_style!(css, "src/components/browser/item_list.module.css");

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = Memo::new(move |_| {
        ctx.browser.with(|b| {
            b.visible_items()
                .into_iter()
                .cloned()
                .collect::<Vec<DriveItem>>()
        })
    });

    view! {
        <Show
            when=move || items.with(|items| !items.is_empty())
            fallback=|| view! { <p class=css::empty>{EMPTY_FOLDER}</p> }
        >
            <ul class=css::list aria-label="Содержимое раздела">
                <For
                    each=move || items.get()
                    key=|item| item.id().to_string()
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn ItemRow(item: DriveItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_item(&item);
    let name = item.display_name();
    let caption = item.caption();
    let (row_class, icon_class) = if item.is_folder() {
        (
            format!("{} {}", css::row, css::rowFolder),
            format!("{} {}", css::icon, css::iconFolder),
        )
    } else {
        (css::row.to_string(), css::icon.to_string())
    };

    let on_click = move |_: leptos::ev::MouseEvent| ctx.activate(item.clone());

    view! {
        <li class=row_class on:click=on_click role="button" tabindex="0">
            <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
            <div class=css::text>
                <span class=css::name>{name}</span>
                <span class=css::caption>{caption}</span>
            </div>
            <span class=css::chevron aria-hidden="true"><Icon icon=ic::CHEVRON_RIGHT /></span>
        </li>
    }
}
