//! Name filter for the current folder listing.

use crate::models::DriveItem;

/// Items whose name contains `query`, ignoring case, in their original order.
///
/// An empty query keeps every item.
pub fn filter_items<'a>(items: &'a [DriveItem], query: &str) -> Vec<&'a DriveItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileItem, FileKind, FolderItem};

    fn folder(id: &str, name: &str) -> DriveItem {
        DriveItem::Folder(FolderItem {
            id: id.to_string(),
            name: name.to_string(),
            items: vec![],
        })
    }

    fn file(id: &str, name: &str) -> DriveItem {
        DriveItem::File(FileItem {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::Pdf,
            locator: format!("https://example.com/{id}"),
            inline_content: None,
        })
    }

    fn listing() -> Vec<DriveItem> {
        vec![
            folder("d1", "01_Регламенты"),
            file("f1", "Стандарт_внешнего_вида.pdf"),
            file("f2", "Скрипт_приветствия.txt"),
            folder("d2", "02_Обучающие_видео"),
        ]
    }

    fn ids(items: &[&DriveItem]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = listing();
        assert_eq!(ids(&filter_items(&items, "")), ["d1", "f1", "f2", "d2"]);
    }

    #[test]
    fn test_case_insensitive_cyrillic() {
        let items = listing();
        assert_eq!(ids(&filter_items(&items, "СКРИПТ")), ["f2"]);
        assert_eq!(ids(&filter_items(&items, "видео")), ["d2"]);
    }

    #[test]
    fn test_matches_raw_name_including_underscores() {
        let items = listing();
        assert_eq!(ids(&filter_items(&items, "_вида")), ["f1"]);
        assert!(filter_items(&items, "nothing here").is_empty());
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let items = listing();
        for query in ["р", "0", ".PDF", "Обуч", "т_"] {
            let kept = filter_items(&items, query);
            let needle = query.to_lowercase();
            for item in &items {
                let matches = item.name().to_lowercase().contains(&needle);
                let was_kept = kept.iter().any(|k| k.id() == item.id());
                assert_eq!(matches, was_kept, "query {query:?}, item {:?}", item.name());
            }
        }
    }
}
