use crate::cli::menu::{self, KeyInput, MenuChoice, TermInput};
use jukebox::assets::resolver::resolve_all;
use jukebox::assets::{Category, Copier, CopyReport, Manifest};
use jukebox::config::Settings;
use jukebox::core::path::{GameDir, HostDirs, Platform};
use jukebox::core::version::select_index_version;
use jukebox::core::JukeboxResult;
use std::fmt::Write;
use tracing::info;

pub fn run(settings: &Settings) -> JukeboxResult<()> {
    let mut input = TermInput::new();
    run_with(
        settings,
        Platform::current(),
        &HostDirs::detect(),
        &mut input,
    )?;
    Ok(())
}

/// Full extraction flow. Returns `None` when the user exits from the menu.
pub fn run_with(
    settings: &Settings,
    platform: Platform,
    dirs: &HostDirs,
    input: &mut dyn KeyInput,
) -> JukeboxResult<Option<CopyReport>> {
    print_banner();

    let game = GameDir::locate(settings.minecraft_dir.as_deref(), platform, dirs)?;
    println!("Minecraft folder: {}", game.root.display());
    println!("Indexes folder: {}", game.indexes.display());
    println!("Objects folder: {}", game.objects.display());
    println!("Export folder: {}", settings.export_dir.display());

    let version = select_index_version(&game.indexes, settings.assets_version.as_deref())?;
    if settings.assets_version.is_some() {
        println!("Assets index: {}", version);
    } else {
        println!("Latest assets index: {}", version);
    }

    let manifest = Manifest::load(&Manifest::index_path(&game.indexes, &version))?;

    let category = match settings.category {
        Some(category) => category,
        None => {
            menu::print_menu();
            match menu::choose(input)? {
                MenuChoice::Exit => return Ok(None),
                MenuChoice::Extract(category) => category,
            }
        }
    };

    let report = extract(&manifest, category, &game, settings);
    print!("{}", format_summary(&report));
    Ok(Some(report))
}

/// Filter, resolve and copy the assets of `category`
pub fn extract(
    manifest: &Manifest,
    category: Category,
    game: &GameDir,
    settings: &Settings,
) -> CopyReport {
    let entries = category.select(manifest);
    info!(
        %category,
        selected = entries.len(),
        indexed = manifest.len(),
        "selected assets"
    );

    let tasks = resolve_all(entries, &settings.export_dir, &game.objects);
    println!("\nExtracting {} file(s)...", tasks.len());
    Copier::new(settings.overwrite_existing).run_with_progress(&tasks)
}

fn print_banner() {
    println!("Jukebox: Minecraft music extractor");
    println!("Extracts music & sound effects from your local Minecraft game folder.");
    println!("For more information on the game folder, see https://minecraft.wiki/w/.minecraft");
    println!("Please run Minecraft at least once before running jukebox.\n");
}

pub fn format_summary(report: &CopyReport) -> String {
    let counts = report.counts();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "\nCopy summary:");
    let _ = writeln!(out, "Successful copies: {}", counts.succeeded);
    let _ = writeln!(out, "Failed copies: {}", counts.failed);
    let _ = writeln!(out, "Omitted copies: {}", counts.omitted);

    if counts.failed > 0 {
        let _ = writeln!(out, "Errors occurred when copying files:");
        for (i, (task, cause)) in report.failed().enumerate() {
            let _ = writeln!(
                out,
                "{}. Source: {}, Destination: {} ({})",
                i + 1,
                task.source.display(),
                task.destination.display(),
                cause
            );
        }
    }

    out
}
