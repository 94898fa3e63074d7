mod exporter;

pub use exporter::ClipboardExporter;
