use crate::shared::config::ViewerConfig;
use contracts::domain::a001_generated_result::{ArtifactKind, ArtifactSet};
use web_sys::{Document, Element};

/// Element the viewer mounts into; carries the optional `data-viewer-config`.
pub const MOUNT_ID: &str = "result-viewer";
pub const PREVIEW_IMAGE_ID: &str = "design-preview";

/// Everything the viewer takes from the server-rendered page.
pub struct PageMarkup {
    pub artifacts: ArtifactSet,
    pub initial_tab: ArtifactKind,
    pub config: ViewerConfig,
    pub mount: Option<Element>,
}

/// Reads artifacts, the pre-activated tab and the configuration from the page.
pub fn read_page(document: &Document) -> PageMarkup {
    let artifacts = ArtifactSet::new(
        code_text(document, ArtifactKind::Html),
        code_text(document, ArtifactKind::Css),
        code_text(document, ArtifactKind::Js),
    );
    let artifacts = match preview_src(document) {
        Some(src) => artifacts.with_preview(src),
        None => artifacts,
    };

    let active_id = document
        .query_selector(".tab-btn.active")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("data-tab"));
    let initial_tab = resolve_initial_tab(active_id.as_deref());

    let mount = document.get_element_by_id(MOUNT_ID);
    let config = ViewerConfig::from_element(mount.as_ref());

    log::debug!(
        "Page read: html={}B css={}B js={}B, active tab '{}'",
        artifacts.text(ArtifactKind::Html).map_or(0, str::len),
        artifacts.text(ArtifactKind::Css).map_or(0, str::len),
        artifacts.text(ArtifactKind::Js).map_or(0, str::len),
        initial_tab.as_str()
    );

    PageMarkup {
        artifacts,
        initial_tab,
        config,
        mount,
    }
}

/// Text of `#<kind> code`; an absent container reads as empty.
fn code_text(document: &Document, kind: ArtifactKind) -> String {
    document
        .query_selector(&format!("#{} code", kind.as_str()))
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn preview_src(document: &Document) -> Option<String> {
    document
        .get_element_by_id(PREVIEW_IMAGE_ID)
        .and_then(|el| el.get_attribute("src"))
        .filter(|src| !src.is_empty())
}

/// The markup pre-marks exactly one tab; fall back to the first one otherwise.
fn resolve_initial_tab(active_id: Option<&str>) -> ArtifactKind {
    active_id
        .and_then(ArtifactKind::from_id)
        .unwrap_or(ArtifactKind::Html)
}
