//! Interactive prompt collector
//!
//! The single interactive point in the whole pipeline. Questions are
//! asked before any filesystem or network side effect, so an
//! interrupted session leaves nothing to clean up.

use anyhow::{Context, Result};
use convert_case::{Case, Casing};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use serde::Serialize;

/// Application types offered by the templates, in prompt order.
pub const APP_TYPES: [&str; 3] = ["default", "tabs", "drawer"];

/// Answers collected from the operator for one `init` invocation.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    /// Display name of the new project.
    pub project_name: String,
    /// Reverse-DNS bundle identifier, consumed by the rename stage.
    pub app_id: String,
    /// Free-text project description (may be empty).
    pub description: String,
    /// Author name (may be empty).
    pub author: String,
    /// Selected application type, when the command variant asks for one.
    pub app_type: Option<String>,
}

/// Render context for the package manifest.
///
/// The bundle identifier is deliberately absent: it is consumed by the
/// rename stage and never substituted into the manifest, so an
/// `{{appId}}` placeholder renders as the empty string like any other
/// unmatched placeholder.
#[derive(Debug, Serialize)]
pub struct ManifestContext<'a> {
    name: &'a str,
    description: &'a str,
    author: &'a str,
    #[serde(rename = "appType", skip_serializing_if = "Option::is_none")]
    app_type: Option<&'a str>,
}

impl AnswerSet {
    /// Build the render context for the package manifest.
    #[must_use]
    pub fn manifest_context(&self) -> ManifestContext<'_> {
        ManifestContext {
            name: &self.project_name,
            description: &self.description,
            author: &self.author,
            app_type: self.app_type.as_deref(),
        }
    }
}

/// Collect the full answer set for an `init` invocation.
///
/// Blocks until the operator has answered every question. The defaults
/// are the CLI-supplied project name and a bundle identifier derived
/// from whatever name the operator settles on.
///
/// # Errors
///
/// Returns an error when a prompt is interrupted (EOF, no tty). No
/// partial state exists at that point.
pub fn collect(default_name: &str) -> Result<AnswerSet> {
    let theme = ColorfulTheme::default();

    let app_type_index = Select::with_theme(&theme)
        .with_prompt("Select the application type")
        .items(&APP_TYPES)
        .default(0)
        .interact()
        .context("Application type prompt was interrupted")?;

    let project_name: String = Input::with_theme(&theme)
        .with_prompt("Please enter the project name")
        .default(default_name.to_string())
        .interact_text()
        .context("Project name prompt was interrupted")?;

    let app_id: String = Input::with_theme(&theme)
        .with_prompt("Please enter the application id")
        .default(derive_app_id(&project_name))
        .interact_text()
        .context("Application id prompt was interrupted")?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Please enter a project description")
        .allow_empty(true)
        .interact_text()
        .context("Description prompt was interrupted")?;

    let author: String = Input::with_theme(&theme)
        .with_prompt("Please enter the author's name")
        .allow_empty(true)
        .interact_text()
        .context("Author prompt was interrupted")?;

    Ok(AnswerSet {
        project_name,
        app_id,
        description,
        author,
        app_type: Some(APP_TYPES[app_type_index].to_string()),
    })
}

/// Derive a default bundle identifier from a project name.
///
/// `MyCoolApp` becomes `com.mycoolapp`.
#[must_use]
pub fn derive_app_id(project_name: &str) -> String {
    format!("com.{}", project_name.to_case(Case::Flat))
}
