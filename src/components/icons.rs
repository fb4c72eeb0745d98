//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{DriveItem, FileKind};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCopy as CopyText, LuDownload as Download,
        LuFile as FileDoc, LuFileText as FileText, LuFilm as FileVideo, LuFolder as Folder,
        LuImage as FileImage, LuPaperclip as File, LuRefreshCw as Sync, LuSearch as Search,
        LuWifiOff as Offline, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Sync, BsCheck2 as Check, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboard as CopyText, BsDownload as Download,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText,
        BsFileEarmarkWord as FileDoc, BsFolderFill as Folder, BsPaperclip as File,
        BsSearch as Search, BsWifiOff as Offline, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_DOC, FileDoc);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(COPY, CopyText);
themed_icon!(CHECK, Check);
themed_icon!(SYNC, Sync);
themed_icon!(OFFLINE, Offline);

/// Icon for a file kind.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Pdf => FILE_PDF,
        FileKind::Image => FILE_IMAGE,
        FileKind::Video => FILE_VIDEO,
        FileKind::Text => FILE_TEXT,
        FileKind::Doc => FILE_DOC,
        FileKind::Other => FILE,
    }
}

/// Icon for a listing row.
pub fn for_item(item: &DriveItem) -> Icon {
    match item {
        DriveItem::Folder(_) => FOLDER,
        DriveItem::File(file) => for_kind(file.kind),
    }
}
