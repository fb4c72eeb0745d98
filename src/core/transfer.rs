//! Download and copy actions for the previewed file.
//!
//! Non-text files are retrieved and saved; if that fails for any reason the
//! locator is opened directly instead. Text files are copied to the clipboard
//! and a confirmation is shown for [`COPY_CONFIRMATION_MS`].
//!
//! Only one download runs at a time: a request made while another is in
//! flight returns [`DownloadOutcome::Busy`] without touching the network.

use std::future::Future;

use crate::config::COPY_CONFIRMATION_MS;
use crate::core::cell::StateCell;
use crate::core::error::TransferError;
use crate::core::host::{HostShim, ImpactStyle, NotificationKind};
use crate::models::FileItem;

/// Busy and confirmation flags shown by the file view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferState {
    downloading: bool,
    copied: bool,
    copy_epoch: u64,
}

impl TransferState {
    pub fn is_downloading(&self) -> bool {
        self.downloading
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    fn try_begin_download(&mut self) -> bool {
        if self.downloading {
            return false;
        }
        self.downloading = true;
        true
    }

    fn finish_download(&mut self) {
        self.downloading = false;
    }

    /// Shows the confirmation and returns its epoch.
    fn confirm_copy(&mut self) -> u64 {
        self.copy_epoch += 1;
        self.copied = true;
        self.copy_epoch
    }

    /// Hides the confirmation unless a newer copy replaced it.
    fn expire_copy(&mut self, epoch: u64) {
        if self.copy_epoch == epoch {
            self.copied = false;
        }
    }
}

/// Browser facilities the transfer actions rely on.
pub trait FileHost {
    /// Retrieved file content, handed back to [`FileHost::save`].
    type Payload;

    fn retrieve(&self, locator: &str)
    -> impl Future<Output = Result<Self::Payload, TransferError>>;
    fn save(&self, file_name: &str, payload: Self::Payload) -> Result<(), TransferError>;
    /// Opens the locator in a new view.
    fn open_external(&self, locator: &str);
    fn write_clipboard(&self, text: &str) -> impl Future<Output = Result<(), TransferError>>;
    fn delay(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Result of [`download`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved,
    /// Retrieval or saving failed; the locator was opened instead.
    OpenedExternally,
    /// Another download is in flight.
    Busy,
    /// The file has no locator.
    NothingToDownload,
}

/// Result of [`copy_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard refused the write. Nothing is shown to the user.
    Failed,
    /// The file has no inline content.
    NothingToCopy,
}

/// Saves `file` to the device, falling back to opening its locator.
pub async fn download<C, F>(
    state: &C,
    files: &F,
    host: &dyn HostShim,
    file: &FileItem,
) -> DownloadOutcome
where
    C: StateCell<TransferState>,
    F: FileHost,
{
    if !file.has_locator() {
        return DownloadOutcome::NothingToDownload;
    }
    if !state.update_state(|s| s.try_begin_download()).unwrap_or(false) {
        return DownloadOutcome::Busy;
    }
    host.impact_occurred(ImpactStyle::Light);

    let saved = match files.retrieve(&file.locator).await {
        Ok(payload) => files.save(&file.name, payload),
        Err(err) => Err(err),
    };

    let outcome = match saved {
        Ok(()) => {
            host.notification_occurred(NotificationKind::Success);
            DownloadOutcome::Saved
        }
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Download of '{}' failed, opening directly: {}", file.name, _err).into(),
            );
            files.open_external(&file.locator);
            DownloadOutcome::OpenedExternally
        }
    };

    state.update_state(|s| s.finish_download());
    outcome
}

/// Copies the inline text of `file` and shows a short confirmation.
pub async fn copy_text<C, F>(
    state: &C,
    files: &F,
    host: &dyn HostShim,
    file: &FileItem,
) -> CopyOutcome
where
    C: StateCell<TransferState>,
    F: FileHost,
{
    let Some(text) = file.inline_content.as_deref() else {
        return CopyOutcome::NothingToCopy;
    };
    if files.write_clipboard(text).await.is_err() {
        return CopyOutcome::Failed;
    }

    host.notification_occurred(NotificationKind::Success);
    let Some(epoch) = state.update_state(|s| s.confirm_copy()) else {
        return CopyOutcome::Copied;
    };
    files.delay(COPY_CONFIRMATION_MS).await;
    state.update_state(|s| s.expire_copy(epoch));
    CopyOutcome::Copied
}
