use super::{ArchiveLibrary, ArchiveWriter};
use crate::shared::capability::browser::{js_error_message, window_global};
use crate::shared::dependency_loader::LibraryFetcher;
use contracts::shared::errors::ViewerError;
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

#[derive(Serialize)]
struct GenerateOptions {
    #[serde(rename = "type")]
    output: &'static str,
}

fn archive_error(e: JsValue) -> ViewerError {
    ViewerError::ArchiveConstructionFailed(js_error_message(&e))
}

fn method(target: &JsValue, name: &str) -> Result<js_sys::Function, ViewerError> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(archive_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| {
            ViewerError::ArchiveConstructionFailed(format!("JSZip.{} is not a function", name))
        })
}

/// JSZip loaded from a `<script>` tag.
pub struct JsZipLibrary {
    constructor: js_sys::Function,
}

impl JsZipLibrary {
    /// Picks up the constructor published under `window[global]`.
    pub fn from_global(global: &str) -> Result<Self, ViewerError> {
        window_global(global)
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
            .map(|constructor| Self { constructor })
            .ok_or_else(|| {
                ViewerError::DependencyLoadFailed(format!("window.{} is not defined", global))
            })
    }
}

impl ArchiveLibrary for JsZipLibrary {
    fn create_archive(&self) -> Result<Box<dyn ArchiveWriter>, ViewerError> {
        let instance = js_sys::Reflect::construct(&self.constructor, &js_sys::Array::new())
            .map_err(archive_error)?;
        Ok(Box::new(JsZipWriter { instance }))
    }
}

struct JsZipWriter {
    instance: JsValue,
}

impl ArchiveWriter for JsZipWriter {
    fn add_entry(&mut self, name: &str, contents: &str) -> Result<(), ViewerError> {
        method(&self.instance, "file")?
            .call2(
                &self.instance,
                &JsValue::from_str(name),
                &JsValue::from_str(contents),
            )
            .map(|_| ())
            .map_err(archive_error)
    }

    fn finish(self: Box<Self>) -> LocalBoxFuture<'static, Result<Vec<u8>, ViewerError>> {
        let started = (|| {
            let options = serde_wasm_bindgen::to_value(&GenerateOptions {
                output: "uint8array",
            })
            .map_err(|e| ViewerError::ArchiveConstructionFailed(e.to_string()))?;
            method(&self.instance, "generateAsync")?
                .call1(&self.instance, &options)
                .map_err(archive_error)?
                .dyn_into::<js_sys::Promise>()
                .map_err(|_| {
                    ViewerError::ArchiveConstructionFailed("generateAsync did not return a promise".into())
                })
        })();

        match started {
            Ok(promise) => async move {
                let value = JsFuture::from(promise).await.map_err(archive_error)?;
                Ok::<_, ViewerError>(js_sys::Uint8Array::new(&value).to_vec())
            }
            .boxed_local(),
            Err(e) => future::ready(Err(e)).boxed_local(),
        }
    }
}

/// Fetches a bundling library by injecting a `<script>` tag.
///
/// Resolves without touching the network when the global is already defined.
pub struct ScriptTagFetcher {
    url: String,
    global: String,
}

impl ScriptTagFetcher {
    pub fn new(url: impl Into<String>, global: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            global: global.into(),
        }
    }
}

impl LibraryFetcher<Rc<dyn ArchiveLibrary>> for ScriptTagFetcher {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<Rc<dyn ArchiveLibrary>, ViewerError>> {
        let url = self.url.clone();
        let global = self.global.clone();
        async move {
            if let Ok(library) = JsZipLibrary::from_global(&global) {
                return Ok(Rc::new(library) as Rc<dyn ArchiveLibrary>);
            }
            inject_script(&url).await?;
            JsZipLibrary::from_global(&global).map(|l| Rc::new(l) as Rc<dyn ArchiveLibrary>)
        }
        .boxed_local()
    }
}

fn load_error(e: JsValue) -> ViewerError {
    ViewerError::DependencyLoadFailed(js_error_message(&e))
}

async fn inject_script(url: &str) -> Result<(), ViewerError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ViewerError::DependencyLoadFailed("No document object".into()))?;
    let head = document
        .head()
        .ok_or_else(|| ViewerError::DependencyLoadFailed("No head element".into()))?;

    let script = document
        .create_element("script")
        .map_err(load_error)?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| ViewerError::DependencyLoadFailed("Failed to cast to script".into()))?;
    script.set_src(url);
    script.set_async(true);

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script).map_err(load_error)?;
    log::debug!("Loading bundling library from {}", url);

    if JsFuture::from(loaded).await.is_err() {
        // Drop the dead tag so a retry starts from a clean document.
        script.remove();
        return Err(ViewerError::DependencyLoadFailed(format!("could not fetch {}", url)));
    }
    Ok(())
}
