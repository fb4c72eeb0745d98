//! Data models for the knowledge-base browser.
//!
//! - [`DriveItem`], [`FolderItem`], [`FileItem`], [`FileKind`] - folder listing entries
//! - [`clean_name`] - display transform for item names

mod item;

pub use item::{DriveItem, FileItem, FileKind, FolderItem, clean_name};
