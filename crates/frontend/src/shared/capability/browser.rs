//! Browser implementations of the viewer capabilities.

use super::{Capability, FullscreenTarget, Highlighter, Spawner, Timer};
use contracts::shared::errors::ViewerError;
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Best-effort human readable text of a JS exception.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    format!("{:?}", value)
}

/// Looks up a property of `window` (e.g. `hljs`, `JSZip`).
pub fn window_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// highlight.js exposed as `window.hljs`.
pub struct HljsHighlighter {
    hljs: JsValue,
    highlight_all: js_sys::Function,
}

impl HljsHighlighter {
    pub fn detect() -> Capability<Rc<dyn Highlighter>> {
        let found = window_global("hljs").and_then(|hljs| {
            let highlight_all = js_sys::Reflect::get(&hljs, &JsValue::from_str("highlightAll"))
                .ok()?
                .dyn_into::<js_sys::Function>()
                .ok()?;
            Some(Rc::new(HljsHighlighter {
                hljs,
                highlight_all,
            }) as Rc<dyn Highlighter>)
        });
        if found.is_none() {
            log::debug!("hljs not found, code re-highlighting disabled");
        }
        Capability::from_option(found)
    }
}

impl Highlighter for HljsHighlighter {
    fn highlight_all(&self) {
        if let Err(e) = self.highlight_all.call0(&self.hljs) {
            log::warn!("hljs.highlightAll failed: {}", js_error_message(&e));
        }
    }
}

/// Fullscreen request for an element looked up by id at call time.
pub struct ElementFullscreen {
    element_id: String,
}

impl ElementFullscreen {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl FullscreenTarget for ElementFullscreen {
    fn request_fullscreen(&self) -> Result<(), ViewerError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.element_id))
            .ok_or(ViewerError::UnavailableCapability("preview element"))?;

        // Older WebKit only ships the prefixed variant.
        for method in ["requestFullscreen", "webkitRequestFullscreen"] {
            let candidate = js_sys::Reflect::get(&element, &JsValue::from_str(method))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
            if let Some(request) = candidate {
                // The standard API returns a promise that rejects when the user agent refuses.
                return match request.call0(&element) {
                    Ok(result) => {
                        if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
                            wasm_bindgen_futures::spawn_local(async move {
                                if let Err(e) = JsFuture::from(promise).await {
                                    log::warn!("Fullscreen request refused: {}", js_error_message(&e));
                                }
                            });
                        }
                        Ok(())
                    }
                    Err(e) => {
                        log::warn!("Fullscreen request failed: {}", js_error_message(&e));
                        Ok(())
                    }
                };
            }
        }
        Err(ViewerError::UnavailableCapability("fullscreen"))
    }
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(ms).boxed_local()
    }
}

pub fn browser_spawner() -> Spawner {
    Rc::new(|future: LocalBoxFuture<'static, ()>| {
        wasm_bindgen_futures::spawn_local(future)
    })
}
