//! Clipboard access through the Web Clipboard API.
//!
//! `navigator.clipboard` only exists in secure contexts, so the writer is
//! detected once and handed out as a `Capability`.

use crate::shared::capability::browser::js_error_message;
use crate::shared::capability::{Capability, ClipboardWriter};
use contracts::shared::errors::ViewerError;
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub struct WebClipboard {
    clipboard: web_sys::Clipboard,
}

impl WebClipboard {
    pub fn detect() -> Capability<Rc<dyn ClipboardWriter>> {
        let found = web_sys::window().and_then(|window| {
            let navigator = window.navigator();
            let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map(|v| !v.is_undefined() && !v.is_null())
                .unwrap_or(false);
            has_clipboard.then(|| {
                Rc::new(WebClipboard {
                    clipboard: navigator.clipboard(),
                }) as Rc<dyn ClipboardWriter>
            })
        });
        if found.is_none() {
            log::warn!("navigator.clipboard is unavailable, copy buttons will report failure");
        }
        Capability::from_option(found)
    }
}

impl ClipboardWriter for WebClipboard {
    /// Rejections (permission denied, document not focused) become `ClipboardDenied`.
    fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ViewerError>> {
        let promise = self.clipboard.write_text(&text);
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ViewerError::ClipboardDenied(js_error_message(&e)))
        }
        .boxed_local()
    }
}
