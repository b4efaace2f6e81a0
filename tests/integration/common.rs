//! Common utilities for integration tests

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::{Path, PathBuf};

pub const MENU_HASH: &str = "abc123f0e1d2c3b4a5968778695a4b3c2d1e0f00";
pub const CALM_HASH: &str = "ab99000000000000000000000000000000000001";
pub const CLICK_HASH: &str = "def4560000000000000000000000000000000002";

/// Isolated home directory with a fake `.minecraft` inside
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn game_dir(&self) -> PathBuf {
        self.temp.child(".minecraft").to_path_buf()
    }

    pub fn export_dir(&self) -> PathBuf {
        self.temp.child("export").to_path_buf()
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.game_dir().join("assets").join("objects")
    }

    /// Create the asset layout with one index and its blobs
    pub fn create_game(&self) {
        self.write_index(
            "1.19",
            &format!(
                r#"{{
  "objects": {{
    "minecraft/sounds/music/menu/menu1.ogg": {{"hash": "{MENU_HASH}", "size": 4}},
    "minecraft/sounds/music/game/calm1.ogg": {{"hash": "{CALM_HASH}", "size": 4}},
    "minecraft/sounds/effects/click.ogg": {{"hash": "{CLICK_HASH}", "size": 5}},
    "minecraft/lang/en_gb.json": {{"hash": "0123456789abcdef0123456789abcdef01234567", "size": 2}}
  }}
}}"#
            ),
        );
        self.write_index("1.9", r#"{"objects": {}}"#);
        self.write_blob(MENU_HASH, "menu");
        self.write_blob(CALM_HASH, "calm");
        self.write_blob(CLICK_HASH, "click");
    }

    pub fn write_index(&self, version: &str, content: &str) {
        self.temp
            .child(".minecraft/assets/indexes")
            .child(format!("{}.json", version))
            .write_str(content)
            .unwrap();
        self.temp
            .child(".minecraft/assets/objects")
            .create_dir_all()
            .unwrap();
    }

    pub fn write_blob(&self, hash: &str, content: &str) {
        self.temp
            .child(".minecraft/assets/objects")
            .child(&hash[..2])
            .child(hash)
            .write_str(content)
            .unwrap();
    }

    /// A jukebox command whose home and config directories point into the temp dir
    pub fn jukebox(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("jukebox").unwrap();
        cmd.current_dir(self.temp.path());

        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", self.temp.path());
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }
}

pub fn exported(export: &Path, logical_path: &str) -> PathBuf {
    logical_path
        .split('/')
        .fold(export.to_path_buf(), |path, part| path.join(part))
}
