//! Knowledge-base items: folders and files.
//!
//! Providers describe folders by the presence of an `items` list, so the wire
//! format stays untagged while the Rust model is an explicit sum type.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Leading ordering prefix such as `01_`.
static ORDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+_").expect("static regex is valid"));

/// Strip the ordering prefix and turn underscores into spaces.
///
/// `"01_Standard_of_look.pdf"` becomes `"Standard of look.pdf"`. Applying it
/// again leaves the result unchanged.
pub fn clean_name(name: &str) -> String {
    ORDER_PREFIX.replace(name, "").replace('_', " ")
}

/// Kind of a file, as reported by the content provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileKind {
    Pdf,
    Image,
    Video,
    Text,
    Doc,
    /// Anything the provider sends that we do not recognise.
    #[default]
    #[serde(other)]
    Other,
}

impl FileKind {
    /// Short uppercase label shown under the item name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Text => "TEXT",
            Self::Doc => "DOC",
            Self::Other => "FILE",
        }
    }

    /// Text files carry their content inline and are copied, not downloaded.
    #[inline]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// A folder and its children, in provider order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FolderItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub items: Vec<DriveItem>,
}

/// A file with its locator and optional inline text.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FileItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: FileKind,
    /// Download/preview URL. Empty when the content is inline.
    #[serde(rename = "url", default, deserialize_with = "null_as_default")]
    pub locator: String,
    /// Inline payload, present for text files only.
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub inline_content: Option<String>,
}

impl FileItem {
    /// Whether there is a locator to retrieve.
    #[inline]
    pub fn has_locator(&self) -> bool {
        !self.locator.trim().is_empty()
    }
}

/// Entry of a folder listing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DriveItem {
    Folder(FolderItem),
    File(FileItem),
}

impl DriveItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    /// Name with the ordering prefix removed, for display.
    pub fn display_name(&self) -> String {
        clean_name(self.name())
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Caption under the name: "Раздел" for folders, the kind for files.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Folder(_) => crate::config::text::FOLDER_CAPTION,
            Self::File(file) => file.kind.label(),
        }
    }
}

/// Accept both `"42"` and `42` as identifiers.
/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_prefix_and_underscores() {
        assert_eq!(clean_name("01_Standard.pdf"), "Standard.pdf");
        assert_eq!(clean_name("02_Обучающие_видео"), "Обучающие видео");
        assert_eq!(clean_name("Скрипт_приветствия.txt"), "Скрипт приветствия.txt");
        assert_eq!(clean_name("2024 report"), "2024 report");
    }

    #[test]
    fn test_clean_name_is_idempotent() {
        for name in ["01_Standard.pdf", "Standard.pdf", "10_20_nested_name", "_x_"] {
            let once = clean_name(name);
            assert_eq!(clean_name(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_folder_is_recognised_by_items() {
        let json = r#"[
            {"id": "f1", "name": "01_Docs", "items": []},
            {"id": "x1", "name": "a.pdf", "type": "PDF", "url": "https://example.com/a.pdf"}
        ]"#;
        let items: Vec<DriveItem> = serde_json::from_str(json).unwrap();

        assert!(items[0].is_folder());
        assert!(!items[1].is_folder());
        match &items[1] {
            DriveItem::File(file) => {
                assert_eq!(file.kind, FileKind::Pdf);
                assert!(file.has_locator());
                assert_eq!(file.inline_content, None);
            }
            DriveItem::Folder(_) => panic!("expected a file"),
        }
    }

    #[test]
    fn test_unknown_kind_and_missing_fields() {
        let json = r#"{"id": 7, "name": "notes.rtf", "type": "RTF"}"#;
        let item: DriveItem = serde_json::from_str(json).unwrap();

        let DriveItem::File(file) = item else {
            panic!("expected a file");
        };
        assert_eq!(file.id, "7");
        assert_eq!(file.kind, FileKind::Other);
        assert!(!file.has_locator());
    }

    #[test]
    fn test_text_file_keeps_inline_content() {
        let json = r#"{"id": "t", "name": "hello.txt", "type": "TEXT", "url": "", "content": "Hello"}"#;
        let item: DriveItem = serde_json::from_str(json).unwrap();

        let DriveItem::File(file) = item else {
            panic!("expected a file");
        };
        assert!(file.kind.is_text());
        assert_eq!(file.inline_content.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_caption() {
        let folder = DriveItem::Folder(FolderItem {
            id: "1".into(),
            name: "Docs".into(),
            items: vec![],
        });
        assert_eq!(folder.caption(), "Раздел");
        assert_eq!(FileKind::Video.label(), "VIDEO");
        assert_eq!(FileKind::Other.label(), "FILE");
    }

    #[test]
    fn test_null_url_and_type_read_as_missing() {
        let json = r#"[
            {"id": "a", "name": "One.pdf", "type": "PDF", "url": "https://example.com/1.pdf"},
            {"id": "b", "name": "Two.pdf", "type": null, "url": null}
        ]"#;
        let items: Vec<DriveItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);

        let DriveItem::File(second) = &items[1] else {
            panic!("expected a file");
        };
        assert_eq!(second.kind, FileKind::Other);
        assert!(!second.has_locator());
    }
}
