//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Build-time values are read with `option_env!`, data assets are loaded at
//! compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Bundled knowledge base served in demo mode.
pub const DEMO_DATASET: &str = include_str!("../assets/data/demo.json");

// =============================================================================
// Content Source
// =============================================================================

/// Reserved root id that selects the bundled dataset instead of the network.
pub const DEMO_FOLDER_ID: &str = "demo";

/// Root folder id, fixed at build time via `FOLDER_ID`.
pub const ROOT_FOLDER_ID: &str = match option_env!("FOLDER_ID") {
    Some(id) => id,
    None => DEMO_FOLDER_ID,
};

/// Endpoint that lists a folder: `{CONTENT_API_URL}?folderId={id}`.
pub const CONTENT_API_URL: &str = match option_env!("CONTENT_API_URL") {
    Some(url) => url,
    None => "/api/folder",
};

/// Simulated latency of the demo provider in milliseconds.
pub const DEMO_DELAY_MS: u32 = 300;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Host Configuration
// =============================================================================

/// Oldest host version that offers the native back button and haptics.
pub const MIN_NATIVE_CHROME_VERSION: f64 = 6.1;

/// Version assumed when the host does not report one.
pub const FALLBACK_HOST_VERSION: f64 = 6.0;

/// Theme key passed to the host header color setter.
pub const HEADER_COLOR_KEY: &str = "secondary_bg_color";

// =============================================================================
// Transfer Configuration
// =============================================================================

/// How long the "copied" confirmation stays visible.
pub const COPY_CONFIRMATION_MS: u32 = 2000;

// =============================================================================
// UI Text
// =============================================================================

/// User-facing strings.
pub mod text {
    /// Header title at the root folder.
    pub const APP_TITLE: &str = "База знаний";
    /// Caption under folder rows.
    pub const FOLDER_CAPTION: &str = "Раздел";
    /// Search input placeholder.
    pub const SEARCH_PLACEHOLDER: &str = "Поиск регламента...";
    /// Loading indicator label.
    pub const LOADING: &str = "Синхронизация...";
    /// Empty listing label.
    pub const EMPTY_FOLDER: &str = "Пусто";
    /// Text file without content.
    pub const EMPTY_TEXT: &str = "Пусто.";
    /// Error view title.
    pub const ERROR_TITLE: &str = "Ошибка";
    /// Default message when a folder fails to load.
    pub const LOAD_ERROR: &str = "Ошибка загрузки базы знаний.";
    /// Retry button label.
    pub const RETRY: &str = "Повторить";
    /// Preview placeholder for kinds without inline preview.
    pub const NO_PREVIEW: &str = "Нет предпросмотра";
    /// Download button label.
    pub const DOWNLOAD: &str = "Скачать на телефон";
    /// Download button label while busy.
    pub const DOWNLOADING: &str = "Загрузка...";
    /// Copy button label.
    pub const COPY: &str = "Копировать скрипт";
    /// Copy button label after a successful copy.
    pub const COPIED: &str = "Скопировано";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
