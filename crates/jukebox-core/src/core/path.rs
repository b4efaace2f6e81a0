use crate::core::error::{JukeboxError, JukeboxResult, Missing};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Host operating system family, as far as the game directory is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Base directories of the current user
#[derive(Debug, Clone, Default)]
pub struct HostDirs {
    pub home: Option<PathBuf>,
    /// Roaming application data (`%APPDATA%` on Windows)
    pub app_data: Option<PathBuf>,
}

impl HostDirs {
    pub fn detect() -> Self {
        Self {
            home: dirs::home_dir(),
            app_data: dirs::data_dir(),
        }
    }
}

/// Get the default Minecraft game directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\.minecraft
/// - macOS: ~/Library/Application Support/minecraft
/// - Linux and other Unix: ~/.minecraft
pub fn default_minecraft_dir(platform: Platform, host: &HostDirs) -> JukeboxResult<PathBuf> {
    match platform {
        Platform::Windows => {
            let app_data = host
                .app_data
                .as_ref()
                .ok_or_else(|| JukeboxError::Path("APPDATA not set".to_string()))?;
            Ok(app_data.join(".minecraft"))
        }
        Platform::MacOs => {
            let home = host
                .home
                .as_ref()
                .ok_or_else(|| JukeboxError::Path("HOME not set".to_string()))?;
            // No leading dot on macOS
            Ok(home
                .join("Library")
                .join("Application Support")
                .join("minecraft"))
        }
        Platform::Unix => {
            let home = host
                .home
                .as_ref()
                .ok_or_else(|| JukeboxError::Path("HOME not set".to_string()))?;
            Ok(home.join(".minecraft"))
        }
    }
}

/// Asset indexes directory (<root>/assets/indexes)
pub fn indexes_dir(root: &Path) -> PathBuf {
    root.join("assets").join("indexes")
}

/// Content-addressed object store (<root>/assets/objects)
pub fn objects_dir(root: &Path) -> PathBuf {
    root.join("assets").join("objects")
}

/// A verified Minecraft game directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDir {
    pub root: PathBuf,
    pub indexes: PathBuf,
    pub objects: PathBuf,
}

impl GameDir {
    /// Resolve the game directory and check its asset subdirectories.
    ///
    /// An empty override counts as absent.
    pub fn locate(
        override_dir: Option<&Path>,
        platform: Platform,
        host: &HostDirs,
    ) -> JukeboxResult<Self> {
        let root = match override_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => default_minecraft_dir(platform, host)?,
        };
        debug!(root = %root.display(), ?platform, "resolved game directory");
        Self::open(root)
    }

    /// Check that `root` has the expected asset layout
    pub fn open(root: PathBuf) -> JukeboxResult<Self> {
        if !root.is_dir() {
            return Err(JukeboxError::not_found(Missing::GameDir, root));
        }

        let indexes = indexes_dir(&root);
        if !indexes.is_dir() {
            return Err(JukeboxError::not_found(Missing::IndexesDir, indexes));
        }

        let objects = objects_dir(&root);
        if !objects.is_dir() {
            return Err(JukeboxError::not_found(Missing::ObjectsDir, objects));
        }

        Ok(Self {
            root,
            indexes,
            objects,
        })
    }
}
