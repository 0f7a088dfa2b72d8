//! Scaffolding pipeline driver
//!
//! The pipeline is a flat, ordered list of stages executed by a single
//! driver loop. Each stage either succeeds or returns a typed error;
//! the driver short-circuits on the first failure and, once the
//! project directory is owned by the pipeline, rolls it back before
//! reporting the error. This replaces the nested continuation chains
//! a tool like this usually grows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::ScaffoldError;

pub mod stages;

pub use stages::build_plan;

static SUCCESS: Emoji = Emoji("✓", "√");
static FAILURE: Emoji = Emoji("✗", "x");

/// One step of the scaffolding pipeline.
///
/// Stages are gated on the success of every stage before them; there
/// is no retry and no partial-stage resumption.
pub trait Stage {
    /// Progress message shown while the stage runs.
    fn label(&self) -> &str;

    /// Execute the stage to completion.
    ///
    /// # Errors
    ///
    /// Returns the stage's typed failure; the driver stops the
    /// pipeline on the first error.
    fn run(&self) -> Result<(), ScaffoldError>;

    /// Whether this stage brings the project directory into existence.
    ///
    /// The driver only rolls back failures that happen after the stage
    /// marked here has succeeded; before that, nothing owned by the
    /// pipeline is on disk.
    fn creates_project_dir(&self) -> bool {
        false
    }
}

/// Ordered stage plan plus the directory it builds.
pub struct Pipeline {
    project_dir: PathBuf,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create a pipeline over an ordered stage plan.
    #[must_use]
    pub fn new(project_dir: PathBuf, stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            project_dir,
            stages,
        }
    }

    /// Drive every stage in order, rolling back on failure.
    ///
    /// Progress is reported with a spinner per stage and a ✓/✗ line
    /// once it settles; the indicator is cosmetic, not part of the
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure. If the project directory
    /// already existed when the failure happened, it has been removed
    /// (best effort) by the time the error is returned.
    pub fn run(&self) -> Result<(), ScaffoldError> {
        let mut owns_project_dir = false;

        for stage in &self.stages {
            let spinner = stage_spinner(stage.label());

            match stage.run() {
                Ok(()) => {
                    spinner.finish_and_clear();
                    println!("{} {}", style(SUCCESS).green(), stage.label());
                    if stage.creates_project_dir() {
                        owns_project_dir = true;
                    }
                }
                Err(err) => {
                    spinner.finish_and_clear();
                    println!("{} {}", style(FAILURE).red(), stage.label());
                    if owns_project_dir {
                        rollback(&self.project_dir);
                    }
                    return Err(err);
                }
            }
        }

        Ok(())
    }
}

/// Best-effort removal of a partially constructed project directory.
///
/// Its own failure is deliberately ignored: rollback never changes the
/// reported outcome of the command.
pub fn rollback(project_dir: &Path) {
    let _ = fs::remove_dir_all(project_dir);
}

fn stage_spinner(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
