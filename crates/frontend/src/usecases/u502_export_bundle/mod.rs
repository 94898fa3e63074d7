mod exporter;

pub use exporter::BundleExporter;
