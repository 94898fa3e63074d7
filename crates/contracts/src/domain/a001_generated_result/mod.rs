pub mod aggregate;

pub use aggregate::{Artifact, ArtifactKind, ArtifactSet, DEFAULT_PACKAGE_NAME};
