use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What a [`JukeboxError::NotFound`] is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    GameDir,
    IndexesDir,
    ObjectsDir,
    IndexFile,
    ConfigFile,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Missing::GameDir => "Minecraft folder",
            Missing::IndexesDir => "Indexes folder",
            Missing::ObjectsDir => "Objects folder",
            Missing::IndexFile => "Asset index file",
            Missing::ConfigFile => "Config file",
        };
        f.write_str(name)
    }
}

pub type JukeboxResult<T> = Result<T, JukeboxError>;

#[derive(Error, Debug)]
pub enum JukeboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    /// A required file or directory is missing.
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: Missing, path: PathBuf },

    /// Reading a file or directory failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The indexes directory holds no `*.json` asset index.
    #[error("No asset index found in {}", .dir.display())]
    NoCandidates { dir: PathBuf },

    /// An asset index exists but is not usable.
    #[error("Failed to parse asset index {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl JukeboxError {
    pub fn not_found(what: Missing, path: impl Into<PathBuf>) -> Self {
        JukeboxError::NotFound {
            what,
            path: path.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JukeboxError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        JukeboxError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
