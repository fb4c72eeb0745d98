//! Browser implementation of [`FileHost`].

use web_sys::Blob;

use crate::core::FileHost;
use crate::core::error::TransferError;
use crate::utils::{dom, fetch_blob};

/// Downloads through `fetch` + an object URL, copies through the Clipboard API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFiles;

impl FileHost for BrowserFiles {
    type Payload = Blob;

    async fn retrieve(&self, locator: &str) -> Result<Blob, TransferError> {
        Ok(fetch_blob(locator).await?)
    }

    fn save(&self, file_name: &str, payload: Blob) -> Result<(), TransferError> {
        dom::save_blob(&payload, file_name).map_err(TransferError::SaveFailed)
    }

    fn open_external(&self, locator: &str) {
        dom::open_in_new_tab(locator);
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), TransferError> {
        dom::write_clipboard(text)
            .await
            .map_err(TransferError::Clipboard)
    }

    async fn delay(&self, ms: u32) {
        dom::sleep(ms).await;
    }
}
