pub mod u501_copy_artifact;
pub mod u502_export_bundle;
