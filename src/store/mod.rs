//! Persistence of the aggregated crawl result
//!
//! The core only depends on the [`Store`] trait; [`JsonFileStore`] is the
//! default implementation writing one timestamped JSON snapshot per run.

mod json;
mod traits;

pub use json::JsonFileStore;
pub use traits::{Artifact, ArtifactMetadata, Store, StoreError};
