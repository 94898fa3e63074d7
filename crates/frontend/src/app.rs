use crate::domain::a001_generated_result::ui::viewer::{
    read_page, ResultViewer, ResultViewerVm, ViewerServices,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Reads the server-rendered result page and mounts the viewer over it.
///
/// The static markup inside the mount element is only a no-JS fallback; it is
/// replaced once the artifacts have been read.
pub fn mount_result_viewer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document object, viewer not mounted");
        return;
    };

    let page = read_page(&document);
    let services = ViewerServices::browser(&page.config);
    let mount = page.mount.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    // The view model owns signals, so it is built under the mounted root's owner
    let root = move || {
        let vm = ResultViewerVm::new(page.artifacts, page.initial_tab, &page.config, services);
        view! { <ResultViewer vm=vm /> }
    };

    match mount {
        Some(mount) => {
            mount.set_inner_html("");
            leptos::mount::mount_to(mount, root).forget();
        }
        None => {
            log::warn!("#result-viewer not found, mounting to body");
            leptos::mount::mount_to_body(root);
        }
    }
}
