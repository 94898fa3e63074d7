use super::{ArchiveLibrary, ArchiveWriter};
use crate::shared::dependency_loader::LibraryFetcher;
use contracts::shared::errors::ViewerError;
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::io::{Cursor, Write};
use std::rc::Rc;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// In-process archive writer (deflate).
pub struct ZipLibrary;

impl ArchiveLibrary for ZipLibrary {
    fn create_archive(&self) -> Result<Box<dyn ArchiveWriter>, ViewerError> {
        Ok(Box::new(ZipArchiveWriter {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }))
    }
}

struct ZipArchiveWriter {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

fn archive_error(e: impl std::fmt::Display) -> ViewerError {
    ViewerError::ArchiveConstructionFailed(e.to_string())
}

impl ArchiveWriter for ZipArchiveWriter {
    fn add_entry(&mut self, name: &str, contents: &str) -> Result<(), ViewerError> {
        // wasm32 has no wall clock for SystemTime; pin the DOS epoch.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.writer.start_file(name, options).map_err(archive_error)?;
        self.writer
            .write_all(contents.as_bytes())
            .map_err(archive_error)
    }

    fn finish(self: Box<Self>) -> LocalBoxFuture<'static, Result<Vec<u8>, ViewerError>> {
        let ZipArchiveWriter { writer } = *self;
        let result = writer
            .finish()
            .map(|cursor| cursor.into_inner())
            .map_err(archive_error);
        future::ready(result).boxed_local()
    }
}

/// Resolves the bundler without any network fetch.
pub struct BuiltinFetcher;

impl LibraryFetcher<Rc<dyn ArchiveLibrary>> for BuiltinFetcher {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<Rc<dyn ArchiveLibrary>, ViewerError>> {
        future::ready(Ok(Rc::new(ZipLibrary) as Rc<dyn ArchiveLibrary>)).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::read_zip_entries;
    use futures::executor::block_on;

    #[test]
    fn test_entries_are_stored_verbatim() {
        let mut writer = ZipLibrary.create_archive().unwrap();
        writer.add_entry("index.html", "<p>hi</p>").unwrap();
        writer.add_entry("styles.css", "").unwrap();
        writer.add_entry("script.js", "console.log('ü');").unwrap();
        let bytes = block_on(writer.finish()).unwrap();

        assert_eq!(
            read_zip_entries(&bytes),
            vec![
                ("index.html".to_string(), "<p>hi</p>".to_string()),
                ("styles.css".to_string(), String::new()),
                ("script.js".to_string(), "console.log('ü');".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_entry_is_an_archive_error() {
        let mut writer = ZipLibrary.create_archive().unwrap();
        writer.add_entry("index.html", "a").unwrap();
        let err = writer.add_entry("index.html", "b").unwrap_err();
        assert!(matches!(err, ViewerError::ArchiveConstructionFailed(_)));
    }

    #[test]
    fn test_builtin_fetcher_resolves_immediately() {
        let library = block_on(BuiltinFetcher.fetch()).unwrap();
        let writer = library.create_archive().unwrap();
        let bytes = block_on(writer.finish()).unwrap();
        assert!(read_zip_entries(&bytes).is_empty());
    }
}
