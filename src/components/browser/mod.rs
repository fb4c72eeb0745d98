//! Knowledge base screen.
//!
//! Components:
//! - [`KnowledgeBase`] - Screen container switching between the views below
//! - [`Header`] - Title, fallback back button and search toggle
//! - [`SearchBar`] - Query input narrowing the listing
//! - [`ItemList`] - Folder listing
//! - [`FileView`] - Previewed file with its download or copy action
//! - [`LoadingView`], [`ErrorView`] - Listing placeholders

mod file_view;
mod header;
mod item_list;
mod knowledge_base;
mod search_bar;
mod status;

pub use file_view::FileView;
pub use header::Header;
pub use item_list::ItemList;
pub use knowledge_base::KnowledgeBase;
pub use search_bar::SearchBar;
pub use status::{ErrorView, LoadingView};
