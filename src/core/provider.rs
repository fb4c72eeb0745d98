//! Content providers and the folder loading flow.
//!
//! A [`ContentProvider`] turns a folder id into its listing. Two are shipped:
//!
//! - [`DemoProvider`] - serves the bundled dataset after a short delay
//! - [`RemoteProvider`] - fetches `{base}?folderId={id}` as JSON
//!
//! [`Provider::configured`] picks one from the build-time root id.
//!
//! Folders are addressed by their path of ids from the root. Ids are only
//! unique among siblings; the remote API resolves the last id on its own.

use std::future::Future;

use crate::config::{CONTENT_API_URL, DEMO_DATASET, DEMO_DELAY_MS, DEMO_FOLDER_ID};
use crate::core::browser::{BrowserState, LoadOutcome};
use crate::core::cell::StateCell;
use crate::core::error::LoadError;
use crate::models::{DriveItem, FolderItem};
use crate::utils::{fetch_json, sleep};

/// Source of folder listings.
pub trait ContentProvider {
    /// Children of the folder at `path` (root id first), in display order.
    fn fetch(&self, path: &[String]) -> impl Future<Output = Result<Vec<DriveItem>, LoadError>>;
}

// =============================================================================
// Demo
// =============================================================================

/// Offline provider backed by an in-memory folder tree.
#[derive(Clone, Debug)]
pub struct DemoProvider {
    root: FolderItem,
    delay_ms: Option<u32>,
}

impl DemoProvider {
    /// Provider over the dataset compiled into the app.
    pub fn bundled() -> Result<Self, LoadError> {
        Ok(Self::parse(DEMO_DATASET)?.with_delay(DEMO_DELAY_MS))
    }

    /// Provider over a JSON folder tree.
    pub fn parse(json: &str) -> Result<Self, LoadError> {
        let root: FolderItem =
            serde_json::from_str(json).map_err(|e| LoadError::InvalidData(e.to_string()))?;
        Ok(Self::from_root(root))
    }

    /// Provider over `root`, answering immediately.
    pub fn from_root(root: FolderItem) -> Self {
        Self {
            root,
            delay_ms: None,
        }
    }

    /// Resolve every request after `delay_ms`.
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Walks `path` down from the root, matching each id among the children
    /// of the previous folder.
    fn resolve(&self, path: &[String]) -> Option<&FolderItem> {
        let (root_id, rest) = path.split_first()?;
        if *root_id != self.root.id {
            return None;
        }
        rest.iter().try_fold(&self.root, |folder, id| {
            folder.items.iter().find_map(|item| match item {
                DriveItem::Folder(child) if child.id == *id => Some(child),
                _ => None,
            })
        })
    }
}

impl ContentProvider for DemoProvider {
    async fn fetch(&self, path: &[String]) -> Result<Vec<DriveItem>, LoadError> {
        if let Some(ms) = self.delay_ms {
            sleep(ms).await;
        }
        self.resolve(path)
            .map(|folder| folder.items.clone())
            .ok_or_else(|| LoadError::FolderNotFound(path.join("/")))
    }
}

// =============================================================================
// Remote
// =============================================================================

/// Provider backed by an HTTP endpoint returning a JSON array of items.
#[derive(Clone, Debug)]
pub struct RemoteProvider {
    base_url: String,
}

impl RemoteProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// URL listing `folder_id`.
    pub fn listing_url(&self, folder_id: &str) -> String {
        let encoded = js_sys::encode_uri_component(folder_id);
        with_folder_query(&self.base_url, &String::from(encoded))
    }
}

impl ContentProvider for RemoteProvider {
    async fn fetch(&self, path: &[String]) -> Result<Vec<DriveItem>, LoadError> {
        let folder_id = path.last().map(String::as_str).unwrap_or_default();
        let url = self.listing_url(folder_id);
        Ok(fetch_json::<Vec<DriveItem>>(&url).await?)
    }
}

/// Appends the already encoded `folderId` parameter to `base`.
fn with_folder_query(base: &str, encoded_id: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}folderId={}", base, separator, encoded_id)
}

// =============================================================================
// Configured provider
// =============================================================================

/// Provider selected at startup.
#[derive(Clone, Debug)]
pub enum Provider {
    Demo(DemoProvider),
    Remote(RemoteProvider),
}

impl Provider {
    /// The demo dataset for the reserved root id, the remote API otherwise.
    ///
    /// Fails only when the bundled dataset cannot be read.
    pub fn configured(root_id: &str) -> Result<Self, LoadError> {
        if root_id == DEMO_FOLDER_ID {
            Ok(Self::Demo(DemoProvider::bundled()?))
        } else {
            Ok(Self::Remote(RemoteProvider::new(CONTENT_API_URL)))
        }
    }
}

impl ContentProvider for Provider {
    async fn fetch(&self, path: &[String]) -> Result<Vec<DriveItem>, LoadError> {
        match self {
            Self::Demo(demo) => demo.fetch(path).await,
            Self::Remote(remote) => remote.fetch(path).await,
        }
    }
}

// =============================================================================
// Loading flow
// =============================================================================

/// Loads the active folder of `state` through `provider`.
///
/// Returns `None` if nothing was loaded (no folder id, or the state is gone).
pub async fn load_folder<C, P>(state: &C, provider: &P) -> Option<LoadOutcome>
where
    C: StateCell<BrowserState>,
    P: ContentProvider,
{
    let ticket = state.update_state(|s| s.begin_load()).flatten()?;
    let result = provider.fetch(ticket.path()).await;

    #[cfg(target_arch = "wasm32")]
    if let Err(err) = &result {
        web_sys::console::warn_1(
            &format!("Failed to load folder '{}': {}", ticket.folder_id(), err).into(),
        );
    }

    let outcome = state.update_state(|s| s.finish_load(ticket, result))?;

    #[cfg(target_arch = "wasm32")]
    if outcome == LoadOutcome::Stale {
        web_sys::console::log_1(&"Discarded listing of a folder that is no longer active".into());
    }

    Some(outcome)
}
