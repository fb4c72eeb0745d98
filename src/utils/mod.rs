//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_blob`] - Network fetching with timeout
//! - [`BrowserFiles`] - Downloads and clipboard for the file actions
//! - [`TelegramHost`] - Mini-App host bridge
//! - [`dom`] - Window, navigation and timer helpers

mod browser_files;
pub mod dom;
mod fetch;
mod telegram;

pub use browser_files::BrowserFiles;
pub use dom::sleep;
pub use fetch::{fetch_blob, fetch_json};
pub use telegram::TelegramHost;
