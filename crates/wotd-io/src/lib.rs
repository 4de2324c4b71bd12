pub mod artifact;
pub mod images;

pub use artifact::{ArtifactError, read_artifact, write_artifact};
pub use images::{HttpImageStore, ImageError, ImageStore, LocalImageStore};
