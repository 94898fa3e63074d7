pub mod dependency_status;
pub mod errors;
pub mod notification;
pub mod view_state;
