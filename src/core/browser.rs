//! Browser state machine.
//!
//! Holds the navigation stack, the previewed file, the current listing and its
//! load status, and the search query. Everything the view shows is derived
//! from a [`BrowserState`] snapshot.
//!
//! # Back precedence
//!
//! [`BrowserState::back`] first closes an open file, then leaves the current
//! folder. At the root with nothing selected it does nothing; the host decides
//! what that means.
//!
//! # Superseded loads
//!
//! Each [`BrowserState::begin_load`] hands out a ticket with a fresh token.
//! A result is applied only if its ticket is still the latest one, so a slow
//! listing for a folder the user already left cannot overwrite the current one.

use crate::config::text::APP_TITLE;
use crate::core::error::LoadError;
use crate::core::search::filter_items;
use crate::models::{DriveItem, FileItem, FolderItem, clean_name};

/// What [`BrowserState::back`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackOutcome {
    /// Closed the previewed file; the stack is untouched.
    ClearedSelection,
    /// Left the current folder.
    LeftFolder,
    /// Already at the root with nothing selected.
    AtRoot,
}

/// What [`BrowserState::finish_load`] did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The listing replaced the current items.
    Applied,
    /// The error was recorded; the previous items are kept.
    Failed,
    /// A newer load was started meanwhile; the result was dropped.
    Stale,
}

/// Handle for one in-flight folder load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    token: u64,
    path: Vec<String>,
}

impl LoadTicket {
    /// Ids from the root to the folder being loaded, root first.
    ///
    /// Ids are only unique among siblings, so the whole path identifies a
    /// folder while its id alone may not.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Folder being loaded.
    pub fn folder_id(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

/// Whether the active folder moved since the last observation.
///
/// `previous` is `None` before the first observation, which always loads.
/// Only a change of the active path triggers a load; selecting or closing a
/// file, searching and load results do not.
pub fn folder_changed(previous: Option<&[String]>, current: &[String]) -> bool {
    previous != Some(current)
}

/// Complete UI state of the browser screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserState {
    root_id: String,
    stack: Vec<FolderItem>,
    selected: Option<FileItem>,
    items: Vec<DriveItem>,
    loading: bool,
    error: Option<String>,
    query: String,
    search_open: bool,
    load_token: u64,
}

impl BrowserState {
    /// Creates the state for a browser rooted at `root_id`.
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            stack: Vec::new(),
            selected: None,
            items: Vec::new(),
            loading: false,
            error: None,
            query: String::new(),
            search_open: false,
            load_token: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn selected(&self) -> Option<&FileItem> {
        self.selected.as_ref()
    }

    /// Unfiltered listing of the current folder.
    pub fn items(&self) -> &[DriveItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Id of the folder on screen: top of the stack, or the root.
    pub fn active_folder_id(&self) -> &str {
        self.stack
            .last()
            .map(|folder| folder.id.as_str())
            .unwrap_or(&self.root_id)
    }

    /// Ids from the root down to the active folder, root first.
    pub fn active_path(&self) -> Vec<String> {
        std::iter::once(self.root_id.clone())
            .chain(self.stack.iter().map(|folder| folder.id.clone()))
            .collect()
    }

    /// Enters `folder`. Refused while a file is open.
    pub fn open(&mut self, folder: FolderItem) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.stack.push(folder);
        true
    }

    pub fn select(&mut self, file: FileItem) {
        self.selected = Some(file);
    }

    /// Closes the previewed file. Returns whether one was open.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Tap on a listing row: folders are entered, files previewed.
    pub fn activate(&mut self, item: DriveItem) {
        match item {
            DriveItem::Folder(folder) => {
                self.open(folder);
            }
            DriveItem::File(file) => self.select(file),
        }
    }

    pub fn back(&mut self) -> BackOutcome {
        if self.clear_selection() {
            BackOutcome::ClearedSelection
        } else if self.stack.pop().is_some() {
            BackOutcome::LeftFolder
        } else {
            BackOutcome::AtRoot
        }
    }

    /// Whether a back control should be offered.
    pub fn can_go_back(&self) -> bool {
        self.selected.is_some() || !self.stack.is_empty()
    }

    /// Header title: the open file, else the current folder, else the app name.
    pub fn title(&self) -> String {
        if let Some(file) = &self.selected {
            clean_name(&file.name)
        } else if let Some(folder) = self.stack.last() {
            clean_name(&folder.name)
        } else {
            APP_TITLE.to_string()
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Shows or hides the search bar. Hiding it clears the query.
    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        if !self.search_open {
            self.query.clear();
        }
    }

    /// Current listing narrowed by the query.
    pub fn visible_items(&self) -> Vec<&DriveItem> {
        filter_items(&self.items, &self.query)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Marks a load of the active folder as started.
    ///
    /// Returns `None` when there is no folder id to load.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.active_folder_id().is_empty() {
            return None;
        }
        let path = self.active_path();
        self.load_token += 1;
        self.loading = true;
        self.error = None;
        Some(LoadTicket {
            token: self.load_token,
            path,
        })
    }

    /// Applies the result of the load identified by `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<DriveItem>, LoadError>,
    ) -> LoadOutcome {
        if ticket.token != self.load_token {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                LoadOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err.user_message());
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    fn folder(id: &str, name: &str, items: Vec<DriveItem>) -> FolderItem {
        FolderItem {
            id: id.to_string(),
            name: name.to_string(),
            items,
        }
    }

    fn file(id: &str, name: &str, kind: FileKind) -> FileItem {
        FileItem {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            locator: format!("https://example.com/{id}"),
            inline_content: None,
        }
    }

    fn loaded(state: &mut BrowserState, items: Vec<DriveItem>) {
        let ticket = state.begin_load().unwrap();
        assert_eq!(state.finish_load(ticket, Ok(items)), LoadOutcome::Applied);
    }

    #[test]
    fn test_active_folder_defaults_to_root() {
        let state = BrowserState::new("root");
        assert_eq!(state.active_folder_id(), "root");
        assert!(!state.can_go_back());
        assert_eq!(state.title(), APP_TITLE);
    }

    #[test]
    fn test_open_then_back_restores_active_folder() {
        let mut state = BrowserState::new("root");
        state.open(folder("a", "01_A", vec![]));

        for id in ["b", "c"] {
            let before = state.active_folder_id().to_string();
            assert!(state.open(folder(id, id, vec![])));
            assert_eq!(state.active_folder_id(), id);
            assert_eq!(state.back(), BackOutcome::LeftFolder);
            assert_eq!(state.active_folder_id(), before);
        }
    }

    #[test]
    fn test_back_prefers_selection_over_stack() {
        let mut state = BrowserState::new("root");
        state.open(folder("a", "01_A", vec![]));
        state.select(file("f", "01_Doc.pdf", FileKind::Pdf));
        let stack_before = state.stack.clone();

        assert_eq!(state.back(), BackOutcome::ClearedSelection);
        assert!(state.selected().is_none());
        assert_eq!(state.stack, stack_before);
        assert_eq!(state.active_folder_id(), "a");
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut state = BrowserState::new("root");
        let before = state.clone();
        assert_eq!(state.back(), BackOutcome::AtRoot);
        assert_eq!(state, before);
    }

    #[test]
    fn test_open_refused_while_file_selected() {
        let mut state = BrowserState::new("root");
        state.select(file("f", "x.pdf", FileKind::Pdf));
        assert!(!state.open(folder("a", "A", vec![])));
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_activate_dispatches_on_variant() {
        let mut state = BrowserState::new("root");
        state.activate(DriveItem::Folder(folder("a", "01_Регламенты", vec![])));
        assert_eq!(state.active_folder_id(), "a");
        assert_eq!(state.title(), "Регламенты");

        state.activate(DriveItem::File(file("f", "Скрипт_приветствия.txt", FileKind::Text)));
        assert_eq!(state.selected().map(|f| f.id.as_str()), Some("f"));
        assert_eq!(state.title(), "Скрипт приветствия.txt");
        assert!(state.can_go_back());
    }

    #[test]
    fn test_failed_load_keeps_previous_items() {
        let mut state = BrowserState::new("root");
        let items = vec![DriveItem::Folder(folder("a", "A", vec![]))];
        loaded(&mut state, items.clone());

        let ticket = state.begin_load().unwrap();
        assert!(state.is_loading());
        let outcome = state.finish_load(ticket, Err(LoadError::Provider("offline".into())));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(state.items(), items.as_slice());
        assert_eq!(state.error(), Some("offline"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_load_clears_error() {
        let mut state = BrowserState::new("root");
        let ticket = state.begin_load().unwrap();
        state.finish_load(ticket, Err(LoadError::FolderNotFound("root".into())));
        assert!(state.error().is_some());

        state.begin_load();
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = BrowserState::new("root");
        let first = state.begin_load().unwrap();
        state.open(folder("a", "A", vec![]));
        let second = state.begin_load().unwrap();
        assert_eq!(second.folder_id(), "a");
        assert_eq!(second.path(), ["root", "a"]);

        let fresh = vec![DriveItem::File(file("f", "fresh.pdf", FileKind::Pdf))];
        assert_eq!(state.finish_load(second, Ok(fresh.clone())), LoadOutcome::Applied);

        let old = vec![DriveItem::File(file("g", "old.pdf", FileKind::Pdf))];
        assert_eq!(state.finish_load(first, Ok(old)), LoadOutcome::Stale);
        assert_eq!(state.items(), fresh.as_slice());
    }

    #[test]
    fn test_empty_root_id_does_not_load() {
        let mut state = BrowserState::new("");
        assert!(state.begin_load().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_closing_search_clears_query() {
        let mut state = BrowserState::new("root");
        loaded(
            &mut state,
            vec![
                DriveItem::File(file("a", "Alpha.pdf", FileKind::Pdf)),
                DriveItem::File(file("b", "Beta.pdf", FileKind::Pdf)),
            ],
        );

        state.toggle_search();
        state.set_query("ALP");
        assert_eq!(state.visible_items().len(), 1);

        state.toggle_search();
        assert!(!state.is_search_open());
        assert_eq!(state.query(), "");
        assert_eq!(state.visible_items().len(), 2);
    }

    /// Runs one observation of the active folder, as the app does after
    /// every state change, and reports whether it loaded.
    fn observe(last: &mut Option<Vec<String>>, state: &BrowserState) -> bool {
        let current = state.active_path();
        let changed = folder_changed(last.as_deref(), &current);
        *last = Some(current);
        changed
    }

    #[test]
    fn test_only_active_folder_changes_trigger_loads() {
        let mut state = BrowserState::new("root");
        let mut last = None;
        assert!(observe(&mut last, &state));
        assert!(!observe(&mut last, &state));

        state.activate(DriveItem::Folder(folder("a", "A", vec![])));
        assert!(observe(&mut last, &state));

        state.select(file("f", "Doc.pdf", FileKind::Pdf));
        assert!(!observe(&mut last, &state));

        assert_eq!(state.back(), BackOutcome::ClearedSelection);
        assert!(!observe(&mut last, &state));

        state.toggle_search();
        state.set_query("doc");
        assert!(!observe(&mut last, &state));

        assert_eq!(state.back(), BackOutcome::LeftFolder);
        assert!(observe(&mut last, &state));

        assert_eq!(state.back(), BackOutcome::AtRoot);
        assert!(!observe(&mut last, &state));
    }

    #[test]
    fn test_nested_folder_with_parent_id_triggers_load() {
        let mut state = BrowserState::new("root");
        state.open(folder("s", "S", vec![]));
        let mut last = Some(state.active_path());

        state.open(folder("s", "S", vec![]));
        assert_eq!(state.active_folder_id(), "s");
        assert!(observe(&mut last, &state));
    }

    #[test]
    fn test_ticket_path_follows_stack() {
        let mut state = BrowserState::new("root");
        state.open(folder("b", "B", vec![]));
        state.open(folder("s", "S", vec![]));
        let ticket = state.begin_load().unwrap();
        assert_eq!(ticket.path(), ["root", "b", "s"]);
        assert_eq!(ticket.folder_id(), "s");
    }
}
