use crate::assets::filter::Category;
use jukebox_core::{JukeboxError, JukeboxResult, Missing};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the default config file path
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\jukebox\config.yaml
/// - Linux: ~/.config/jukebox/config.yaml
/// - macOS: ~/Library/Application Support/jukebox/config.yaml
pub fn config_file() -> JukeboxResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| JukeboxError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("jukebox").join("config.yaml"))
}

/// Optional overrides read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `.minecraft` folder (`minecraft` on macOS). Empty or missing means the platform default.
    #[serde(default)]
    pub minecraft_dir: Option<String>,

    /// Where extracted files go. Empty or missing means the current directory.
    #[serde(default)]
    pub export_dir: Option<String>,

    /// Replace files that already exist at the destination
    #[serde(default)]
    pub overwrite_existing: bool,

    /// Asset index version, e.g. "1.12". Empty or missing means the latest one installed.
    #[serde(default)]
    pub assets_version: Option<String>,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used if present, and defaults otherwise. The file is never created.
    pub fn load(explicit: Option<&Path>) -> JukeboxResult<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(JukeboxError::not_found(Missing::ConfigFile, path));
                }
                path.to_path_buf()
            }
            None => {
                let path = config_file()?;
                if !path.is_file() {
                    debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> JukeboxResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| JukeboxError::read(path, e))?;
        Self::from_yaml(&content).map_err(|e| {
            JukeboxError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn from_yaml(content: &str) -> JukeboxResult<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Values given on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub minecraft_dir: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub assets_version: Option<String>,
    pub overwrite: bool,
    pub category: Option<Category>,
}

/// Settings for one run, fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub minecraft_dir: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub overwrite_existing: bool,
    pub assets_version: Option<String>,
    /// Skip the interactive menu
    pub category: Option<Category>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Settings {
    /// Merge the config file with command line overrides.
    ///
    /// `cwd` is the export root when none is configured.
    pub fn resolve(config: Config, overrides: Overrides, cwd: &Path) -> Self {
        let minecraft_dir = overrides
            .minecraft_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| non_empty(config.minecraft_dir).map(PathBuf::from));

        let export_dir = overrides
            .export_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| non_empty(config.export_dir).map(PathBuf::from))
            .unwrap_or_else(|| cwd.to_path_buf());

        let assets_version = non_empty(overrides.assets_version)
            .or_else(|| non_empty(config.assets_version));

        Self {
            minecraft_dir,
            export_dir,
            overwrite_existing: overrides.overwrite || config.overwrite_existing,
            assets_version,
            category: overrides.category,
        }
    }

    /// Build settings for this process from the config file and CLI flags
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> JukeboxResult<Self> {
        let config = Config::load(config_path)?;
        let cwd = env::current_dir()
            .map_err(|e| JukeboxError::Path(format!("Failed to get current directory: {}", e)))?;
        Ok(Self::resolve(config, overrides, &cwd))
    }
}
