//! Screen container.

use leptos::prelude::*;

use super::{ErrorView, FileView, Header, ItemList, LoadingView, SearchBar};
use crate::app::AppContext;
use crate::core::BrowserState;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Which view fills the content area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pane {
    File,
    Error,
    Loading,
    Listing,
}

impl Pane {
    fn of(state: &BrowserState) -> Self {
        if state.selected().is_some() {
            Self::File
        } else if state.error().is_some() {
            Self::Error
        } else if state.is_loading() {
            Self::Loading
        } else {
            Self::Listing
        }
    }
}

#[component]
pub fn KnowledgeBase() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let pane = Memo::new(move |_| ctx.browser.with(Pane::of));
    let show_search = Memo::new(move |_| {
        ctx.browser
            .with(|b| b.is_search_open() && b.selected().is_none())
    });

    view! {
        <div class=css::screen>
            <Header />
            <Show when=move || show_search.get()>
                <SearchBar />
            </Show>
            <main class=css::content>
                {move || match pane.get() {
                    Pane::File => view! { <FileView /> }.into_any(),
                    Pane::Error => view! { <ErrorView /> }.into_any(),
                    Pane::Loading => view! { <LoadingView /> }.into_any(),
                    Pane::Listing => view! { <ItemList /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoadError;
    use crate::models::{FileItem, FileKind};

    fn note() -> FileItem {
        FileItem {
            id: "n".to_string(),
            name: "note".to_string(),
            kind: FileKind::Text,
            locator: String::new(),
            inline_content: None,
        }
    }

    #[test]
    fn test_pane_precedence() {
        let mut state = BrowserState::new("root");
        let ticket = state.begin_load().unwrap();
        assert_eq!(Pane::of(&state), Pane::Loading);

        state.finish_load(ticket, Err(LoadError::Provider("down".to_string())));
        assert_eq!(Pane::of(&state), Pane::Error);

        state.select(note());
        assert_eq!(Pane::of(&state), Pane::File);

        state.clear_selection();
        let ticket = state.begin_load().unwrap();
        state.finish_load(ticket, Ok(Vec::new()));
        assert_eq!(Pane::of(&state), Pane::Listing);
    }
}
