//! Input loading and source metadata.

mod loader;
mod source;

pub use loader::{Loader, LoaderConfig};
pub use source::{SourceKind, SourceMetadata};
