//! Generated Result Viewer UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: reads the server-rendered page (artifacts, initial tab, config)
//! - view_model.rs: ResultViewerVm, the tab/zoom/wrap/export state machine
//! - view.rs: Main component ResultViewer

mod model;
mod view;
mod view_model;

pub use model::{read_page, PageMarkup, MOUNT_ID, PREVIEW_IMAGE_ID};
pub use view::ResultViewer;
pub use view_model::{ResultViewerVm, ViewerServices};
