//! Core logic of the knowledge-base browser.
//!
//! This module provides:
//! - [`BrowserState`] navigation, selection, loading and search state
//! - [`ContentProvider`] sources and the [`load_folder`] flow
//! - [`download`] / [`copy_text`] file actions guarded by [`TransferState`]
//! - [`HostShim`] capabilities of the embedding platform

pub mod browser;
mod cell;
pub mod error;
pub mod host;
pub mod provider;
mod search;
pub mod transfer;

pub use browser::{BackOutcome, BrowserState, folder_changed};
pub use cell::StateCell;
pub use host::{HostShim, NoopHost, back_feedback, init_host, sync_back_button};
pub use provider::{ContentProvider, Provider, load_folder};
pub use transfer::{FileHost, TransferState, copy_text, download};
