use crate::shared::archive::{ArchiveLibrary, ZIP_MIME};
use crate::shared::dependency_loader::DependencyLoader;
use crate::shared::export::FileSaver;
use crate::shared::notifications::NotificationCenter;
use contracts::domain::a001_generated_result::ArtifactSet;
use contracts::shared::errors::ViewerError;
use std::rc::Rc;

/// Packs every exportable artifact into one archive and downloads it.
///
/// All-or-nothing: the download is triggered only after the archive has been
/// fully serialized, and any failure before that point aborts the export with
/// a single error notification.
#[derive(Clone)]
pub struct BundleExporter {
    loader: DependencyLoader<Rc<dyn ArchiveLibrary>>,
    saver: Rc<dyn FileSaver>,
    notifications: NotificationCenter,
    package_name: String,
}

impl BundleExporter {
    pub fn new(
        loader: DependencyLoader<Rc<dyn ArchiveLibrary>>,
        saver: Rc<dyn FileSaver>,
        notifications: NotificationCenter,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            loader,
            saver,
            notifications,
            package_name: package_name.into(),
        }
    }

    pub fn loader(&self) -> &DependencyLoader<Rc<dyn ArchiveLibrary>> {
        &self.loader
    }

    pub async fn export_bundle(&self, artifacts: &ArtifactSet) {
        match self.try_export(artifacts).await {
            Ok(size) => {
                log::info!("Exported {} ({} bytes)", self.package_name, size);
                self.notifications.success("All files downloaded as ZIP");
            }
            Err(e) => {
                log::error!("Download failed: {}", e);
                self.notifications.error("Download failed. Please try again.");
            }
        }
    }

    async fn try_export(&self, artifacts: &ArtifactSet) -> Result<usize, ViewerError> {
        let library = self.loader.ensure_loaded().await?;

        let mut archive = library.create_archive()?;
        for (name, contents) in artifacts.export_entries() {
            archive.add_entry(name, contents)?;
        }
        let bytes = archive.finish().await?;

        self.saver.save(&bytes, &self.package_name, ZIP_MIME)?;
        Ok(bytes.len())
    }
}
