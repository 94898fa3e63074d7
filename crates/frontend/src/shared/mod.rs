pub mod archive;
pub mod capability;
pub mod clipboard;
pub mod config;
pub mod dependency_loader;
pub mod export;
pub mod icons;
pub mod notifications;
