use super::model::PREVIEW_IMAGE_ID;
use crate::shared::archive::{ArchiveLibrary, BuiltinFetcher, ScriptTagFetcher};
use crate::shared::capability::browser::{
    browser_spawner, ElementFullscreen, GlooTimer, HljsHighlighter,
};
use crate::shared::capability::{
    Capability, ClipboardWriter, FullscreenTarget, Highlighter, Spawner, Timer,
};
use crate::shared::clipboard::WebClipboard;
use crate::shared::config::{BundlerSource, ViewerConfig};
use crate::shared::dependency_loader::{DependencyLoader, LibraryFetcher};
use crate::shared::export::{BrowserDownload, FileSaver};
use crate::shared::notifications::NotificationCenter;
use crate::usecases::u501_copy_artifact::ClipboardExporter;
use crate::usecases::u502_export_bundle::BundleExporter;
use contracts::domain::a001_generated_result::{ArtifactKind, ArtifactSet};
use contracts::shared::view_state::ViewState;
use leptos::prelude::*;
use std::rc::Rc;

/// Collaborators injected into the viewer.
pub struct ViewerServices {
    pub highlighter: Capability<Rc<dyn Highlighter>>,
    pub fullscreen: Capability<Rc<dyn FullscreenTarget>>,
    pub clipboard: Capability<Rc<dyn ClipboardWriter>>,
    pub library: Rc<dyn LibraryFetcher<Rc<dyn ArchiveLibrary>>>,
    pub saver: Rc<dyn FileSaver>,
    pub timer: Rc<dyn Timer>,
    pub spawner: Spawner,
}

impl ViewerServices {
    /// Real browser collaborators, chosen according to `config`.
    pub fn browser(config: &ViewerConfig) -> Self {
        let library: Rc<dyn LibraryFetcher<Rc<dyn ArchiveLibrary>>> = match config.bundler {
            BundlerSource::Cdn => Rc::new(ScriptTagFetcher::new(
                config.library_url.clone(),
                config.library_global.clone(),
            )),
            BundlerSource::Builtin => Rc::new(BuiltinFetcher),
        };
        Self {
            highlighter: HljsHighlighter::detect(),
            fullscreen: Capability::Present(Rc::new(ElementFullscreen::new(PREVIEW_IMAGE_ID))),
            clipboard: WebClipboard::detect(),
            library,
            saver: Rc::new(BrowserDownload),
            timer: Rc::new(GlooTimer),
            spawner: browser_spawner(),
        }
    }
}

/// State machine behind the result page.
///
/// Synchronous controls (tabs, zoom, wrap, fullscreen) mutate `view_state`
/// directly; copy and export are async and report through `notifications`.
#[derive(Clone)]
pub struct ResultViewerVm {
    pub artifacts: Rc<ArtifactSet>,
    pub view_state: RwSignal<ViewState>,
    pub notifications: NotificationCenter,
    highlighter: Capability<Rc<dyn Highlighter>>,
    fullscreen: Capability<Rc<dyn FullscreenTarget>>,
    clipboard: ClipboardExporter,
    bundle: BundleExporter,
}

impl ResultViewerVm {
    pub fn new(
        artifacts: ArtifactSet,
        initial_tab: ArtifactKind,
        config: &ViewerConfig,
        services: ViewerServices,
    ) -> Self {
        let notifications =
            NotificationCenter::new(services.timer, services.spawner, config.notification);
        let clipboard = ClipboardExporter::new(services.clipboard, notifications.clone());
        let bundle = BundleExporter::new(
            DependencyLoader::new(services.library),
            services.saver,
            notifications.clone(),
            config.package_name.clone(),
        );

        Self {
            artifacts: Rc::new(artifacts),
            view_state: RwSignal::new(ViewState::new(initial_tab)),
            notifications,
            highlighter: services.highlighter,
            fullscreen: services.fullscreen,
            clipboard,
            bundle,
        }
    }

    /// Activates the pane for a `data-tab` identifier; unknown ids are ignored.
    pub fn select_tab(&self, id: &str) {
        let change = self
            .view_state
            .try_update(|s| s.select_tab_by_id(id))
            .flatten();
        let Some(change) = change else {
            log::debug!("Ignoring unknown tab '{}'", id);
            return;
        };
        log::debug!(
            "Tab {} -> {}",
            change.previous.as_str(),
            change.current.as_str()
        );
        if change.needs_highlight() {
            self.highlight_code();
        }
    }

    /// Runs the external highlighter, if the page provides one.
    pub fn highlight_code(&self) {
        if let Capability::Present(highlighter) = &self.highlighter {
            highlighter.highlight_all();
        }
    }

    pub fn zoom_in(&self) {
        if let Some(level) = self.view_state.try_update(|s| s.zoom_in()) {
            log::debug!("Zoom {}%", level.percent());
        }
    }

    pub fn zoom_out(&self) {
        if let Some(level) = self.view_state.try_update(|s| s.zoom_out()) {
            log::debug!("Zoom {}%", level.percent());
        }
    }

    pub fn request_fullscreen(&self) {
        let Capability::Present(target) = &self.fullscreen else {
            return;
        };
        if let Err(e) = target.request_fullscreen() {
            if e.is_silent() {
                log::debug!("Fullscreen skipped: {}", e);
            } else {
                log::warn!("Fullscreen failed: {}", e);
            }
        }
    }

    /// Flips word wrap for every code surface at once.
    pub fn toggle_wrap(&self) {
        let Some(enabled) = self.view_state.try_update(|s| s.toggle_wrap()) else {
            return;
        };
        self.notifications.info(if enabled {
            "Word wrap enabled"
        } else {
            "Word wrap disabled"
        });
    }

    pub async fn copy(&self, kind: ArtifactKind) {
        self.clipboard.copy(&self.artifacts, kind).await;
    }

    pub async fn export_bundle(&self) {
        self.bundle.export_bundle(&self.artifacts).await;
    }
}
