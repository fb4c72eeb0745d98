//! Preview of the selected file.
//!
//! Text files render as a chat bubble with a copy action, everything else as
//! a card with an inline preview (video and image only) and a download action.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text::{COPIED, COPY, DOWNLOAD, DOWNLOADING, EMPTY_TEXT, NO_PREVIEW};
use crate::core::TransferState;
use crate::models::{FileItem, FileKind, clean_name};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/file_view.module.css");

#[component]
pub fn FileView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Memo::new(move |_| ctx.browser.with(|b| b.selected().cloned()));

    move || {
        selected.get().map(|file| {
            if file.kind.is_text() {
                view! { <TextNote file=file /> }.into_any()
            } else {
                view! { <MediaCard file=file /> }.into_any()
            }
        })
    }
}

/// Text shown in the bubble.
fn note_body(file: &FileItem) -> String {
    match file.inline_content.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_TEXT.to_string(),
    }
}

#[component]
fn TextNote(file: FileItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let body = note_body(&file);
    let time = dom::local_time_hhmm();
    let can_copy = file.inline_content.is_some();
    let copied = Memo::new(move |_| ctx.transfer.with(TransferState::is_copied));

    let button_class = move || {
        if copied.get() {
            format!("{} {}", css::actionButton, css::actionButtonDone)
        } else {
            css::actionButton.to_string()
        }
    };

    view! {
        <div class=css::note>
            <div class=css::bubble>
                <p class=css::bubbleText>{body}</p>
                <span class=css::bubbleTime>{time}</span>
            </div>
            <button
                class=button_class
                on:click=move |_| ctx.copy_selected()
                disabled=!can_copy
            >
                {move || if copied.get() {
                    view! { <Icon icon=ic::CHECK /><span>{COPIED}</span> }.into_any()
                } else {
                    view! { <Icon icon=ic::COPY /><span>{COPY}</span> }.into_any()
                }}
            </button>
        </div>
    }
}

#[component]
fn MediaCard(file: FileItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let downloading = Memo::new(move |_| ctx.transfer.with(TransferState::is_downloading));
    let has_locator = file.has_locator();
    let title = clean_name(&file.name);

    let preview = match file.kind {
        FileKind::Video if has_locator => view! {
            <video class=css::preview src=file.locator.clone() controls=true playsinline=true></video>
        }
        .into_any(),
        FileKind::Image if has_locator => view! {
            <img class=css::preview src=file.locator.clone() alt=title.clone() />
        }
        .into_any(),
        _ => view! { <p class=css::noPreview>{NO_PREVIEW}</p> }.into_any(),
    };

    view! {
        <div class=css::card>
            <div class=css::cardHeader>
                <span class=css::cardIcon aria-hidden="true">
                    <Icon icon=ic::for_kind(file.kind) />
                </span>
                <div class=css::cardText>
                    <h2 class=css::cardTitle>{title}</h2>
                    <span class=css::cardKind>{file.kind.label()}</span>
                </div>
            </div>

            <div class=css::previewFrame>{preview}</div>

            <button
                class=css::actionButton
                on:click=move |_| ctx.download_selected()
                disabled=move || downloading.get() || !has_locator
            >
                <Icon icon=ic::DOWNLOAD />
                <span>{move || if downloading.get() { DOWNLOADING } else { DOWNLOAD }}</span>
            </button>
        </div>
    }
}
