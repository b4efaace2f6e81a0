use crate::core::error::{JukeboxError, Missing};

const RUN_GAME_FIRST: &str = "Please run Minecraft at least once before running jukebox.";

/// Suggestions shown under a fatal error
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for JukeboxError {
    fn help(&self) -> Option<String> {
        match self {
            JukeboxError::NotFound { what, .. } => match what {
                Missing::GameDir => Some(
                    "Set `minecraft_dir` in the config file or pass --minecraft-dir <DIR>."
                        .to_string(),
                ),
                Missing::IndexFile => Some(
                    "Check `assets_version` in the config file, or omit it to use the latest index."
                        .to_string(),
                ),
                Missing::ConfigFile => None,
                Missing::IndexesDir | Missing::ObjectsDir => Some(RUN_GAME_FIRST.to_string()),
            },
            JukeboxError::NoCandidates { .. } => Some(RUN_GAME_FIRST.to_string()),
            JukeboxError::Parse { .. } => Some(
                "The asset index may be corrupted. Launch Minecraft to download it again."
                    .to_string(),
            ),
            JukeboxError::Yaml(_) | JukeboxError::Config(_) => {
                Some("Check the syntax of your jukebox config file.".to_string())
            }
            _ => None,
        }
    }
}

/// Render an error for the terminal, followed by a hint when one is known
pub fn format_error_with_help(error: &JukeboxError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n  {}", error, help),
        None => format!("Error: {}", error),
    }
}
