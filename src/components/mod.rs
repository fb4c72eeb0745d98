//! UI components built with Leptos.
//!
//! - [`browser`] - Knowledge base screen (header, listing, file view)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::KnowledgeBase;
