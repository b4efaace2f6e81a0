//! Asset pipeline: index loading, filtering, path resolution and copying.

pub mod copier;
pub mod filter;
pub mod manifest;
pub mod resolver;

pub use copier::{CopyCounts, CopyOutcome, CopyReport, Copier, OmitReason};
pub use filter::Category;
pub use manifest::{AssetEntry, Manifest};
pub use resolver::CopyTask;
