use jukebox_core::core::version::INDEX_EXTENSION;
use jukebox_core::{JukeboxError, JukeboxResult, Missing};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level key of an asset index that wraps all entries
pub const OBJECTS_KEY: &str = "objects";

/// One asset as described by the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Path the game knows the asset by, e.g. `minecraft/sounds/music/menu/menu1.ogg`
    pub logical_path: String,
    /// Lowercase hex digest naming the blob in the object store
    pub hash: String,
    pub size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    hash: String,
    #[serde(default)]
    size: Option<u64>,
}

/// Asset index contents, in file order
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<AssetEntry>,
}

impl Manifest {
    /// Path of the index file for `version`
    pub fn index_path(indexes_dir: &Path, version: &str) -> PathBuf {
        indexes_dir.join(format!("{}{}", version, INDEX_EXTENSION))
    }

    /// Load and validate an asset index file
    pub fn load(path: &Path) -> JukeboxResult<Self> {
        if !path.is_file() {
            return Err(JukeboxError::not_found(Missing::IndexFile, path));
        }

        let bytes = fs::read(path).map_err(|e| JukeboxError::read(path, e))?;
        let content = String::from_utf8(bytes)
            .map_err(|e| JukeboxError::parse(path, format!("not valid UTF-8: {}", e)))?;
        let manifest = Self::parse(&content).map_err(|message| JukeboxError::parse(path, message))?;
        debug!(path = %path.display(), entries = manifest.len(), "loaded asset index");
        Ok(manifest)
    }

    /// Parse index JSON. Errors are plain messages; [`Manifest::load`] attaches the path.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(content).map_err(|e| e.to_string())?;

        let objects = match document.remove(OBJECTS_KEY) {
            Some(serde_json::Value::Object(objects)) => objects,
            Some(_) => return Err(format!("\"{}\" is not an object", OBJECTS_KEY)),
            None => return Err(format!("missing top-level \"{}\" key", OBJECTS_KEY)),
        };

        let mut entries = Vec::with_capacity(objects.len());
        for (logical_path, value) in objects {
            let raw: RawObject = serde_json::from_value(value)
                .map_err(|e| format!("invalid entry \"{}\": {}", logical_path, e))?;
            entries.push(Self::validate(logical_path, raw)?);
        }

        Ok(Self { entries })
    }

    fn validate(logical_path: String, raw: RawObject) -> Result<AssetEntry, String> {
        if raw.hash.len() < 2 || !raw.hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!(
                "invalid hash \"{}\" for \"{}\"",
                raw.hash, logical_path
            ));
        }

        // Every segment must be a plain name so the export path stays under its root
        let relative = logical_path.split('/').all(|segment| {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && !segment.contains(|c: char| c == '\\' || c == ':')
        });
        if !relative {
            return Err(format!("unsafe asset path \"{}\"", logical_path));
        }

        Ok(AssetEntry {
            hash: raw.hash.to_ascii_lowercase(),
            size: raw.size,
            logical_path,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, logical_path: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.logical_path == logical_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }
}

impl FromIterator<AssetEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = AssetEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
