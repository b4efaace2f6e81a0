use crate::assets::manifest::AssetEntry;
use std::path::{Path, PathBuf};

/// Where one asset is copied from and to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Blob in the object store: `<objects>/<hash[..2]>/<hash>`
    pub source: PathBuf,
    /// Readable location: `<export>/<logical path>`
    pub destination: PathBuf,
}

impl CopyTask {
    /// Derive the copy task for `entry`. Pure; touches no files.
    pub fn resolve(entry: &AssetEntry, export_root: &Path, objects_root: &Path) -> Self {
        let destination = entry
            .logical_path
            .split('/')
            .fold(export_root.to_path_buf(), |path, part| path.join(part));

        let source = objects_root.join(&entry.hash[..2]).join(&entry.hash);

        Self {
            source,
            destination,
        }
    }
}

/// Resolve every entry, keeping order
pub fn resolve_all<'a, I>(entries: I, export_root: &Path, objects_root: &Path) -> Vec<CopyTask>
where
    I: IntoIterator<Item = &'a AssetEntry>,
{
    entries
        .into_iter()
        .map(|entry| CopyTask::resolve(entry, export_root, objects_root))
        .collect()
}
