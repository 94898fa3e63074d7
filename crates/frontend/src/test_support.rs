//! Test doubles shared by the unit tests of this crate.

use crate::shared::archive::ArchiveLibrary;
use crate::shared::capability::{ClipboardWriter, FullscreenTarget, Highlighter, Timer};
use crate::shared::dependency_loader::LibraryFetcher;
use crate::shared::export::FileSaver;
use crate::shared::notifications::NotificationCenter;
use contracts::shared::errors::ViewerError;
use contracts::shared::notification::NotificationTimings;
use futures::future::{self, FutureExt, LocalBoxFuture};
use leptos::prelude::Owner;
use std::cell::{Cell, RefCell};
use std::io::{Cursor, Read};
use std::rc::Rc;

/// Sleeps forever: toasts stay in the list for inspection.
pub struct NeverTimer;

impl Timer for NeverTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        future::pending().boxed_local()
    }
}

/// Installs a reactive owner for signals created by the test thread.
pub fn reactive_owner() {
    if Owner::current().is_none() {
        Owner::new().set();
    }
}

/// Notification center whose lifecycle tasks are never run.
pub fn frozen_center() -> NotificationCenter {
    reactive_owner();
    NotificationCenter::new(
        Rc::new(NeverTimer),
        Rc::new(|_fut: LocalBoxFuture<'static, ()>| {}),
        NotificationTimings::default(),
    )
}

pub struct RecordingClipboard {
    pub written: RefCell<Vec<String>>,
    reject: bool,
}

impl RecordingClipboard {
    pub fn accepting() -> Rc<Self> {
        Rc::new(Self {
            written: RefCell::new(Vec::new()),
            reject: false,
        })
    }

    pub fn rejecting() -> Rc<Self> {
        Rc::new(Self {
            written: RefCell::new(Vec::new()),
            reject: true,
        })
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ViewerError>> {
        if self.reject {
            return future::ready(Err(ViewerError::ClipboardDenied("NotAllowedError".into())))
                .boxed_local();
        }
        self.written.borrow_mut().push(text);
        future::ready(Ok(())).boxed_local()
    }
}

#[derive(Default)]
pub struct CountingHighlighter {
    pub calls: Cell<usize>,
}

impl Highlighter for CountingHighlighter {
    fn highlight_all(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[derive(Default)]
pub struct CountingFullscreen {
    pub calls: Cell<usize>,
}

impl FullscreenTarget for CountingFullscreen {
    fn request_fullscreen(&self) -> Result<(), ViewerError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Platform without any fullscreen API.
pub struct NoFullscreenApi;

impl FullscreenTarget for NoFullscreenApi {
    fn request_fullscreen(&self) -> Result<(), ViewerError> {
        Err(ViewerError::UnavailableCapability("fullscreen"))
    }
}

#[derive(Default)]
pub struct RecordingSaver {
    pub saved: RefCell<Vec<(String, String, Vec<u8>)>>,
}

impl FileSaver for RecordingSaver {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), ViewerError> {
        self.saved
            .borrow_mut()
            .push((filename.to_string(), mime.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Fetcher that fails the first `failures` calls, then falls back to the builtin bundler.
pub struct FlakyFetcher {
    pub calls: Cell<usize>,
    failures: usize,
}

impl FlakyFetcher {
    pub fn failing(failures: usize) -> Rc<Self> {
        Rc::new(Self {
            calls: Cell::new(0),
            failures,
        })
    }
}

impl LibraryFetcher<Rc<dyn ArchiveLibrary>> for FlakyFetcher {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<Rc<dyn ArchiveLibrary>, ViewerError>> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call <= self.failures {
            let err = ViewerError::DependencyLoadFailed("could not fetch jszip.min.js".into());
            return future::ready(Err(err)).boxed_local();
        }
        crate::shared::archive::BuiltinFetcher.fetch()
    }
}

/// `(name, contents)` of every entry, in archive order.
pub fn read_zip_entries(bytes: &[u8]) -> Vec<(String, String)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).expect("entry");
            let mut contents = String::new();
            file.read_to_string(&mut contents).expect("utf-8 entry");
            (file.name().to_string(), contents)
        })
        .collect()
}
