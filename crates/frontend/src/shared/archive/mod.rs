//! Archive construction behind a small trait pair.
//!
//! - `ArchiveLibrary::create_archive` - "create archive"
//! - `ArchiveWriter::add_entry` - "add named entry"
//! - `ArchiveWriter::finish` - "serialize to bytes"
//!
//! `JsZipLibrary` drives the lazily loaded JSZip script, `ZipLibrary` builds
//! the archive in-process with the `zip` crate.

mod jszip;
mod zip_backend;

pub use jszip::{JsZipLibrary, ScriptTagFetcher};
pub use zip_backend::{BuiltinFetcher, ZipLibrary};

use contracts::shared::errors::ViewerError;
use futures::future::LocalBoxFuture;

/// MIME type of the produced bundle.
pub const ZIP_MIME: &str = "application/zip";

pub trait ArchiveLibrary {
    fn create_archive(&self) -> Result<Box<dyn ArchiveWriter>, ViewerError>;
}

pub trait ArchiveWriter {
    fn add_entry(&mut self, name: &str, contents: &str) -> Result<(), ViewerError>;

    fn finish(self: Box<Self>) -> LocalBoxFuture<'static, Result<Vec<u8>, ViewerError>>;
}
