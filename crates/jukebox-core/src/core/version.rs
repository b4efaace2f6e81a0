use crate::core::error::{JukeboxError, JukeboxResult};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File extension of asset index files in `assets/indexes`
pub const INDEX_EXTENSION: &str = ".json";

/// One run of a loose version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    /// Digits with leading zeros stripped
    Number(&'a str),
    Text(&'a str),
}

fn runs(s: &str) -> Vec<Run<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let bytes = s.as_bytes();

    while start < bytes.len() {
        let numeric = bytes[start].is_ascii_digit();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != numeric)
            .map_or(bytes.len(), |offset| start + offset);
        let run = &s[start..end];
        out.push(if numeric {
            Run::Number(run.trim_start_matches('0'))
        } else {
            Run::Text(run)
        });
        start = end;
    }

    out
}

fn compare_runs(a: &Run<'_>, b: &Run<'_>) -> Ordering {
    match (a, b) {
        // Arbitrary-length numeric compare: more digits is larger
        (Run::Number(a), Run::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (Run::Text(a), Run::Text(b)) => a.cmp(b),
        (Run::Number(_), Run::Text(_)) => Ordering::Greater,
        (Run::Text(_), Run::Number(_)) => Ordering::Less,
    }
}

/// Compare two version-like strings run by run.
///
/// Digit runs compare numerically and other runs lexically. When one
/// string is a prefix of the other (run-wise), the shorter one is smaller.
/// A text run sorts before a digit run at the same position, so named
/// indexes such as `legacy` rank below numbered releases.
pub fn compare_loose(a: &str, b: &str) -> Ordering {
    let a_runs = runs(a);
    let b_runs = runs(b);

    for (a_run, b_run) in a_runs.iter().zip(b_runs.iter()) {
        let ordering = compare_runs(a_run, b_run);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a_runs.len().cmp(&b_runs.len())
}

/// A version string ordered by [`compare_loose`]
#[derive(Debug, Clone, Copy)]
pub struct LooseVersion<'a>(&'a str);

impl<'a> LooseVersion<'a> {
    pub fn new(s: &'a str) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl PartialEq for LooseVersion<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LooseVersion<'_> {}

impl PartialOrd for LooseVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LooseVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_loose(self.0, other.0)
    }
}

impl fmt::Display for LooseVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Pick the greatest version. Ties keep the earliest candidate.
pub fn latest_version<S: AsRef<str>>(candidates: &[S]) -> Option<&S> {
    let (first, rest) = candidates.split_first()?;
    let mut best = first;
    for candidate in rest {
        if LooseVersion::new(best.as_ref()) < LooseVersion::new(candidate.as_ref()) {
            best = candidate;
        }
    }
    Some(best)
}

/// List asset index versions (file stems of `*.json` files), sorted by file name
pub fn list_index_versions(indexes_dir: &Path) -> JukeboxResult<Vec<String>> {
    let mut versions = Vec::new();

    let read_error = |e| JukeboxError::read(indexes_dir, e);
    for entry in fs::read_dir(indexes_dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        // Follows symlinks, like the loader's check
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!(name = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if let Some(stem) = name.strip_suffix(INDEX_EXTENSION) {
            versions.push(stem.to_string());
        }
    }

    versions.sort();
    Ok(versions)
}

/// Decide which asset index to load.
///
/// An explicit, non-empty version is returned as-is; the loader checks that
/// the file exists. Otherwise the latest index in `indexes_dir` wins.
pub fn select_index_version(indexes_dir: &Path, explicit: Option<&str>) -> JukeboxResult<String> {
    if let Some(version) = explicit.filter(|v| !v.is_empty()) {
        return Ok(version.to_string());
    }

    let candidates = list_index_versions(indexes_dir)?;
    debug!(?candidates, "found asset index candidates");

    latest_version(&candidates)
        .cloned()
        .ok_or_else(|| JukeboxError::NoCandidates {
            dir: indexes_dir.to_path_buf(),
        })
}
