//! Client-side file download.
//!
//! Bytes are wrapped in a `Blob`, exposed through an object URL and fetched by
//! clicking a hidden anchor carrying the `download` attribute.

use crate::shared::capability::browser::js_error_message;
use contracts::shared::errors::ViewerError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// "Trigger browser download of a blob under a given filename".
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), ViewerError>;
}

pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), ViewerError> {
        let blob = create_blob(bytes, mime)?;
        download_blob(&blob, filename)?;
        log::info!("Download started: {} ({} bytes)", filename, bytes.len());
        Ok(())
    }
}

fn download_error(context: &str, e: wasm_bindgen::JsValue) -> ViewerError {
    ViewerError::DownloadFailed(format!("{}: {}", context, js_error_message(&e)))
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, ViewerError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| download_error("Failed to create blob", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ViewerError> {
    let window = web_sys::window().ok_or(ViewerError::DownloadFailed("No window object".into()))?;
    let document = window
        .document()
        .ok_or(ViewerError::DownloadFailed("No document object".into()))?;
    let body = document
        .body()
        .ok_or(ViewerError::DownloadFailed("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| download_error("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| download_error("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| download_error("Failed to cast to anchor", e.into()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| download_error("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| download_error("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| download_error("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| download_error("Failed to revoke URL", e))?;
    Ok(())
}
