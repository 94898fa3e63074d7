use crate::shared::capability::{Capability, ClipboardWriter};
use crate::shared::notifications::NotificationCenter;
use contracts::domain::a001_generated_result::{ArtifactKind, ArtifactSet};
use contracts::shared::errors::ViewerError;
use std::rc::Rc;

/// Copies one artifact's text to the system clipboard.
///
/// Never fails towards the caller: the outcome is reported as a notification
/// and the user may simply click again.
#[derive(Clone)]
pub struct ClipboardExporter {
    clipboard: Capability<Rc<dyn ClipboardWriter>>,
    notifications: NotificationCenter,
}

impl ClipboardExporter {
    pub fn new(
        clipboard: Capability<Rc<dyn ClipboardWriter>>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            clipboard,
            notifications,
        }
    }

    pub async fn copy(&self, artifacts: &ArtifactSet, kind: ArtifactKind) {
        let Some(text) = artifacts.text(kind) else {
            log::debug!("Nothing to copy for '{}'", kind.as_str());
            return;
        };

        let result = match &self.clipboard {
            Capability::Present(clipboard) => clipboard.write_text(text.to_owned()).await,
            Capability::Absent => Err(ViewerError::ClipboardDenied(
                "clipboard API not supported".into(),
            )),
        };

        match result {
            Ok(()) => {
                self.notifications
                    .success(format!("{} copied!", kind.as_str().to_uppercase()));
            }
            Err(e) => {
                log::error!("Failed to copy: {}", e);
                self.notifications.error("Failed to copy to clipboard");
            }
        }
    }
}
