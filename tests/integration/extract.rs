//! Tests for extracting assets with `jukebox --category`

use super::common::{exported, TestContext, CLICK_HASH};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_extract_music_only() {
    let ctx = TestContext::new();
    ctx.create_game();

    ctx.jukebox()
        .args(["--minecraft-dir"])
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "music"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest assets index: 1.19"))
        .stdout(predicate::str::contains("Successful copies: 2"))
        .stdout(predicate::str::contains("Failed copies: 0"));

    let export = ctx.export_dir();
    assert_eq!(
        fs::read_to_string(exported(&export, "minecraft/sounds/music/menu/menu1.ogg")).unwrap(),
        "menu"
    );
    assert_eq!(
        fs::read_to_string(exported(&export, "minecraft/sounds/music/game/calm1.ogg")).unwrap(),
        "calm"
    );
    assert!(!exported(&export, "minecraft/sounds/effects").exists());
    assert!(!exported(&export, "minecraft/lang").exists());
}

#[test]
fn test_extract_all_sounds() {
    let ctx = TestContext::new();
    ctx.create_game();

    ctx.jukebox()
        .arg("--minecraft-dir")
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "sounds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful copies: 3"));

    assert_eq!(
        fs::read_to_string(exported(&ctx.export_dir(), "minecraft/sounds/effects/click.ogg"))
            .unwrap(),
        "click"
    );
}

#[test]
fn test_default_game_dir_and_export_to_cwd() {
    let ctx = TestContext::new();
    ctx.create_game();

    // On Linux the default is $HOME/.minecraft, which the context points at
    if !cfg!(target_os = "linux") {
        return;
    }

    ctx.jukebox()
        .args(["--category", "music"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful copies: 2"));

    assert!(exported(ctx.temp.path(), "minecraft/sounds/music/menu/menu1.ogg").is_file());
}

#[test]
fn test_existing_files_omitted_then_overwritten() {
    let ctx = TestContext::new();
    ctx.create_game();
    let target = exported(&ctx.export_dir(), "minecraft/sounds/music/menu/menu1.ogg");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "old").unwrap();

    ctx.jukebox()
        .arg("--minecraft-dir")
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "music"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omitted copies: 1"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");

    ctx.jukebox()
        .arg("--minecraft-dir")
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "music", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Omitted copies: 0"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "menu");
}

#[test]
fn test_missing_blob_is_reported_but_run_succeeds() {
    let ctx = TestContext::new();
    ctx.create_game();
    fs::remove_file(ctx.objects_dir().join(&CLICK_HASH[..2]).join(CLICK_HASH)).unwrap();

    ctx.jukebox()
        .arg("--minecraft-dir")
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "sounds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful copies: 2"))
        .stdout(predicate::str::contains("Failed copies: 1"))
        .stdout(predicate::str::contains("Errors occurred when copying files:"))
        .stdout(predicate::str::contains(CLICK_HASH));
}

#[test]
fn test_explicit_assets_version() {
    let ctx = TestContext::new();
    ctx.create_game();

    ctx.jukebox()
        .arg("--minecraft-dir")
        .arg(ctx.game_dir())
        .arg("--export-dir")
        .arg(ctx.export_dir())
        .args(["--category", "sounds", "--assets-version", "1.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assets index: 1.9"))
        .stdout(predicate::str::contains("Successful copies: 0"));
}

#[test]
fn test_config_file_supplies_paths() {
    let ctx = TestContext::new();
    ctx.create_game();
    let config = ctx.temp.path().join("jukebox.yaml");
    fs::write(
        &config,
        format!(
            "minecraft_dir: {:?}\nexport_dir: {:?}\n",
            ctx.game_dir().display().to_string(),
            ctx.export_dir().display().to_string()
        ),
    )
    .unwrap();

    ctx.jukebox()
        .arg("--config")
        .arg(&config)
        .args(["--category", "music"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successful copies: 2"));

    assert!(exported(&ctx.export_dir(), "minecraft/sounds/music/game/calm1.ogg").is_file());
}
