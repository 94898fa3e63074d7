//! Memoized, single-flight loader for an optional third-party library.
//!
//! However many callers ask concurrently, at most one fetch is in flight and
//! all of them observe its outcome. A ready library is never fetched again;
//! a failed load is retried by the next request.

use contracts::shared::dependency_status::{DependencyStatus, RequestAction};
use contracts::shared::errors::ViewerError;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Performs one physical fetch of the library.
pub trait LibraryFetcher<T> {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<T, ViewerError>>;
}

/// Future handed to every caller of `ensure_loaded`.
pub type LoadHandle<T> = Shared<LocalBoxFuture<'static, Result<T, ViewerError>>>;

struct LoaderState<T> {
    status: DependencyStatus,
    /// In-flight or completed fetch. Cleared on failure.
    handle: Option<LoadHandle<T>>,
}

pub struct DependencyLoader<T> {
    state: Rc<RefCell<LoaderState<T>>>,
    fetcher: Rc<dyn LibraryFetcher<T>>,
}

impl<T> Clone for DependencyLoader<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            fetcher: Rc::clone(&self.fetcher),
        }
    }
}

impl<T: Clone + 'static> DependencyLoader<T> {
    pub fn new(fetcher: Rc<dyn LibraryFetcher<T>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(LoaderState {
                status: DependencyStatus::NotRequested,
                handle: None,
            })),
            fetcher,
        }
    }

    pub fn status(&self) -> DependencyStatus {
        self.state.borrow().status
    }

    pub fn ensure_loaded(&self) -> LoadHandle<T> {
        let mut state = self.state.borrow_mut();
        let (next, action) = state.status.on_request();
        state.status = next;

        match (action, state.handle.clone()) {
            (RequestAction::ResolveNow, Some(handle)) => handle,
            (RequestAction::JoinInFlight, Some(handle)) => {
                log::debug!("Joining in-flight library load");
                handle
            }
            _ => {
                let handle = self.start_fetch();
                state.status = DependencyStatus::Loading;
                state.handle = Some(handle.clone());
                handle
            }
        }
    }

    fn start_fetch(&self) -> LoadHandle<T> {
        let fetch = self.fetcher.fetch();
        let state: Weak<RefCell<LoaderState<T>>> = Rc::downgrade(&self.state);

        async move {
            let result = fetch.await;
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                state.status = state.status.on_settled(result.is_ok());
                if result.is_err() {
                    state.handle = None;
                }
            }
            match &result {
                Ok(_) => log::info!("Bundling library ready"),
                Err(e) => log::error!("Bundling library load failed: {}", e),
            }
            result
        }
        .boxed_local()
        .shared()
    }
}
