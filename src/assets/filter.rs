use crate::assets::manifest::{AssetEntry, Manifest};
use std::fmt;
use std::str::FromStr;

/// Which assets to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Background music only
    Music,
    /// Music and every sound effect
    Sounds,
}

impl Category {
    /// Logical path prefix selecting this category.
    ///
    /// The music prefix extends the sounds prefix, so `Music` is a subset of `Sounds`.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Music => "minecraft/sounds/music/",
            Category::Sounds => "minecraft/sounds/",
        }
    }

    pub fn matches(self, entry: &AssetEntry) -> bool {
        entry.logical_path.starts_with(self.prefix())
    }

    /// Entries in this category, in index order
    pub fn select(self, manifest: &Manifest) -> Vec<&AssetEntry> {
        manifest.iter().filter(|entry| self.matches(entry)).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Music => write!(f, "music"),
            Category::Sounds => write!(f, "sounds"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "music" => Ok(Category::Music),
            "sounds" | "all" => Ok(Category::Sounds),
            other => Err(format!(
                "unknown category '{}' (expected 'music' or 'sounds')",
                other
            )),
        }
    }
}
