//! Optional collaborators of the result viewer.
//!
//! Every collaborator that may be missing at runtime (syntax highlighter,
//! fullscreen API, clipboard) is held as a `Capability`. Logic matches on the
//! variant instead of probing globals at each call site.

pub mod browser;

use contracts::shared::errors::ViewerError;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

#[derive(Clone)]
pub enum Capability<T> {
    Present(T),
    Absent,
}

impl<T> Capability<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Capability::Present(v),
            None => Capability::Absent,
        }
    }
}

/// External syntax highlighter ("highlight everything currently visible").
pub trait Highlighter {
    fn highlight_all(&self);
}

pub trait FullscreenTarget {
    /// `Err(UnavailableCapability)` when the platform has no fullscreen API.
    fn request_fullscreen(&self) -> Result<(), ViewerError>;
}

pub trait ClipboardWriter {
    fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ViewerError>>;
}

pub trait Timer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Runs a detached future on the single UI thread.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;
