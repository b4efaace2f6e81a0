//! Core utilities for Jukebox
//!
//! Errors, game directory discovery and asset index version selection.
//! Shared by the `jukebox` binary and its library.

pub mod core;

pub use crate::core::error::{JukeboxError, JukeboxResult, Missing};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
pub use crate::core::path::{GameDir, HostDirs, Platform};
pub use crate::core::version::{compare_loose, select_index_version, LooseVersion};
