//! Jukebox: Minecraft music extractor
//!
//! Reads a local Minecraft installation's asset index and copies the
//! content-addressed sound blobs out under their readable names.

/// Core module re-exported from jukebox-core.
pub mod core {
    pub use jukebox_core::core::*;
}

/// Configuration file and run settings.
pub mod config;

/// Asset index loading, filtering and copying.
pub mod assets;
