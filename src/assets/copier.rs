use crate::assets::resolver::CopyTask;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::fs;
use std::io;
use tracing::{debug, warn};

/// Why a task was skipped without touching the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmitReason {
    /// A directory occupies the destination path
    DirectoryConflict,
    /// A file exists and overwriting is disabled
    AlreadyExists,
}

impl fmt::Display for OmitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmitReason::DirectoryConflict => write!(f, "a directory exists at the destination"),
            OmitReason::AlreadyExists => write!(f, "destination file already exists"),
        }
    }
}

/// Result of one copy task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Succeeded(CopyTask),
    Failed { task: CopyTask, cause: String },
    Omitted { task: CopyTask, reason: OmitReason },
}

impl CopyOutcome {
    pub fn task(&self) -> &CopyTask {
        match self {
            CopyOutcome::Succeeded(task) => task,
            CopyOutcome::Failed { task, .. } => task,
            CopyOutcome::Omitted { task, .. } => task,
        }
    }
}

/// Number of tasks per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyCounts {
    pub succeeded: usize,
    pub failed: usize,
    pub omitted: usize,
}

impl CopyCounts {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.omitted
    }
}

/// Outcomes of a batch, in task order
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &CopyTask> {
        self.outcomes.iter().filter_map(|o| match o {
            CopyOutcome::Succeeded(task) => Some(task),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (&CopyTask, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            CopyOutcome::Failed { task, cause } => Some((task, cause.as_str())),
            _ => None,
        })
    }

    pub fn omitted(&self) -> impl Iterator<Item = (&CopyTask, OmitReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            CopyOutcome::Omitted { task, reason } => Some((task, *reason)),
            _ => None,
        })
    }

    pub fn counts(&self) -> CopyCounts {
        let mut counts = CopyCounts::default();
        for outcome in &self.outcomes {
            match outcome {
                CopyOutcome::Succeeded(_) => counts.succeeded += 1,
                CopyOutcome::Failed { .. } => counts.failed += 1,
                CopyOutcome::Omitted { .. } => counts.omitted += 1,
            }
        }
        counts
    }
}

/// Copies blobs out of the object store, one task at a time.
///
/// A failing task is recorded and the batch moves on. Sources are only read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Copier {
    overwrite: bool,
}

impl Copier {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }

    /// Copy a single task and classify the result
    pub fn copy_one(&self, task: &CopyTask) -> CopyOutcome {
        let destination = &task.destination;

        if destination.is_dir() {
            debug!(destination = %destination.display(), "directory in the way, skipping");
            return CopyOutcome::Omitted {
                task: task.clone(),
                reason: OmitReason::DirectoryConflict,
            };
        }

        if destination.is_file() && !self.overwrite {
            return CopyOutcome::Omitted {
                task: task.clone(),
                reason: OmitReason::AlreadyExists,
            };
        }

        match Self::copy_file(task) {
            Ok(bytes) => {
                debug!(
                    source = %task.source.display(),
                    destination = %destination.display(),
                    bytes,
                    "copied asset"
                );
                CopyOutcome::Succeeded(task.clone())
            }
            Err(e) => {
                warn!(
                    source = %task.source.display(),
                    destination = %destination.display(),
                    error = %e,
                    "copy failed"
                );
                CopyOutcome::Failed {
                    task: task.clone(),
                    cause: e.to_string(),
                }
            }
        }
    }

    fn copy_file(task: &CopyTask) -> io::Result<u64> {
        if let Some(parent) = task.destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&task.source, &task.destination)
    }

    /// Copy every task in order
    pub fn run(&self, tasks: &[CopyTask]) -> CopyReport {
        CopyReport {
            outcomes: tasks.iter().map(|task| self.copy_one(task)).collect(),
        }
    }

    /// Like [`Copier::run`], drawing a progress bar on the terminal
    pub fn run_with_progress(&self, tasks: &[CopyTask]) -> CopyReport {
        let pb = ProgressBar::new(tasks.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            outcomes.push(self.copy_one(task));
            pb.inc(1);
        }

        pb.finish_and_clear();
        CopyReport { outcomes }
    }
}
