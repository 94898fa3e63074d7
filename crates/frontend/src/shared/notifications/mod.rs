//! Toast notifications: the lifecycle service and its Leptos host component.

mod center;
mod host;

pub use center::NotificationCenter;
pub use host::NotificationHost;
