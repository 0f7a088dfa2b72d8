//! Error types for the scaffolding pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::process::ToolError;

/// Failures the scaffolding pipeline can report.
///
/// Each variant maps to one boundary of the pipeline: template
/// resolution, the initial clone, the manifest render, and the
/// external post-processing tools. The driver decides per variant
/// whether the partially created project directory must be rolled
/// back.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Requested template identifier is not in the registry.
    #[error("Unknown template '{0}'. Run `rnkit list` to see available templates.")]
    UnknownTemplate(String),

    /// `git clone` failed before the project directory existed.
    #[error("Failed to clone template: {detail}")]
    Clone {
        /// Captured diagnostics from git, or the launch error.
        detail: String,
    },

    /// The manifest could not be read, rendered, or written back.
    #[error("Failed to render manifest {path}: {detail}")]
    Manifest {
        /// Path of the manifest that was being rendered.
        path: PathBuf,
        /// Underlying I/O or template error.
        detail: String,
    },

    /// An external tool exited with failure or could not be launched.
    #[error(transparent)]
    Tool(#[from] ToolError),
}
