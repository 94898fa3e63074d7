//! Load status of a lazily fetched third-party library.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DependencyStatus {
    #[default]
    NotRequested,
    Loading,
    Ready,
    /// Terminal until a new request retries the fetch.
    Failed,
}

/// What a caller of `ensure_loaded` has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    /// Library is available, resolve without fetching.
    ResolveNow,
    /// A fetch is in flight, wait for its outcome.
    JoinInFlight,
    /// Issue a new fetch.
    StartFetch,
}

impl DependencyStatus {
    /// Transition taken when a caller asks for the library.
    pub fn on_request(self) -> (DependencyStatus, RequestAction) {
        match self {
            DependencyStatus::Ready => (DependencyStatus::Ready, RequestAction::ResolveNow),
            DependencyStatus::Loading => (DependencyStatus::Loading, RequestAction::JoinInFlight),
            DependencyStatus::NotRequested | DependencyStatus::Failed => {
                (DependencyStatus::Loading, RequestAction::StartFetch)
            }
        }
    }

    /// Transition taken when the in-flight fetch settles.
    ///
    /// Only `Loading` reacts; a stray completion leaves other states untouched.
    pub fn on_settled(self, succeeded: bool) -> DependencyStatus {
        match (self, succeeded) {
            (DependencyStatus::Loading, true) => DependencyStatus::Ready,
            (DependencyStatus::Loading, false) => DependencyStatus::Failed,
            (other, _) => other,
        }
    }
}
