//! Concrete pipeline stages
//!
//! Clone, render, rename, install, and the macOS-only CocoaPods link
//! step. All external tools run through the captured-output process
//! runner so their diagnostics end up in the reported error.

use std::path::{Path, PathBuf};

use super::Stage;
use crate::error::ScaffoldError;
use crate::manifest;
use crate::platform::HostPlatform;
use crate::process;
use crate::prompts::AnswerSet;

/// Full clone of the template repository into the target directory.
///
/// Git cleans up its own partial target on failure, so this stage does
/// not own anything until it has succeeded.
pub struct CloneStage {
    url: String,
    target: PathBuf,
}

impl Stage for CloneStage {
    fn label(&self) -> &str {
        "Downloading template..."
    }

    fn run(&self) -> Result<(), ScaffoldError> {
        let target = self.target.to_string_lossy();
        process::run("git", &["clone", &self.url, &target], None)
            .map_err(|err| ScaffoldError::Clone { detail: err.detail })
    }

    fn creates_project_dir(&self) -> bool {
        true
    }
}

/// Substitute the collected answers into the generated `package.json`.
pub struct RenderStage {
    manifest_path: PathBuf,
    answers: AnswerSet,
}

impl Stage for RenderStage {
    fn label(&self) -> &str {
        "Rendering package manifest..."
    }

    fn run(&self) -> Result<(), ScaffoldError> {
        manifest::render(&self.manifest_path, &self.answers)
    }
}

/// Rewrite internal package references via `react-native-rename`.
pub struct RenameStage {
    project_dir: PathBuf,
    display_name: String,
    app_id: String,
}

impl Stage for RenameStage {
    fn label(&self) -> &str {
        "Renaming application..."
    }

    fn run(&self) -> Result<(), ScaffoldError> {
        process::run(
            "npx",
            &["react-native-rename", &self.display_name, "-b", &self.app_id],
            Some(&self.project_dir),
        )?;
        Ok(())
    }
}

/// Install the project's declared dependencies with npm.
pub struct InstallStage {
    project_dir: PathBuf,
}

impl Stage for InstallStage {
    fn label(&self) -> &str {
        "Installing dependencies..."
    }

    fn run(&self) -> Result<(), ScaffoldError> {
        process::run("npm", &["install"], Some(&self.project_dir))?;
        Ok(())
    }
}

/// Link native modules through CocoaPods. Only planned on macOS hosts.
pub struct PodInstallStage {
    project_dir: PathBuf,
}

impl Stage for PodInstallStage {
    fn label(&self) -> &str {
        "Linking native modules..."
    }

    fn run(&self) -> Result<(), ScaffoldError> {
        process::run("npx", &["pod-install"], Some(&self.project_dir))?;
        Ok(())
    }
}

/// Build the ordered stage plan for one `init` invocation.
///
/// The plan is always clone, render, rename, install; the CocoaPods
/// link step is appended only when the host platform needs it.
#[must_use]
pub fn build_plan(
    template_url: &str,
    project_dir: &Path,
    answers: &AnswerSet,
    platform: HostPlatform,
) -> Vec<Box<dyn Stage>> {
    let mut plan: Vec<Box<dyn Stage>> = vec![
        Box::new(CloneStage {
            url: template_url.to_string(),
            target: project_dir.to_path_buf(),
        }),
        Box::new(RenderStage {
            manifest_path: project_dir.join("package.json"),
            answers: answers.clone(),
        }),
        Box::new(RenameStage {
            project_dir: project_dir.to_path_buf(),
            display_name: answers.project_name.clone(),
            app_id: answers.app_id.clone(),
        }),
        Box::new(InstallStage {
            project_dir: project_dir.to_path_buf(),
        }),
    ];

    if platform.needs_pod_install {
        plan.push(Box::new(PodInstallStage {
            project_dir: project_dir.to_path_buf(),
        }));
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> AnswerSet {
        AnswerSet {
            project_name: "Demo".to_string(),
            app_id: "com.demo".to_string(),
            description: String::new(),
            author: String::new(),
            app_type: Some("default".to_string()),
        }
    }

    fn plan_labels(needs_pod_install: bool) -> Vec<String> {
        let platform = HostPlatform { needs_pod_install };
        build_plan(
            "https://example.com/template.git",
            Path::new("Demo"),
            &answers(),
            platform,
        )
        .iter()
        .map(|stage| stage.label().to_string())
        .collect()
    }

    #[test]
    fn test_plan_order_without_pods() {
        assert_eq!(
            plan_labels(false),
            vec![
                "Downloading template...",
                "Rendering package manifest...",
                "Renaming application...",
                "Installing dependencies...",
            ]
        );
    }

    #[test]
    fn test_pod_stage_is_planned_only_when_needed() {
        let labels = plan_labels(true);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels.last().unwrap(), "Linking native modules...");
        assert!(!plan_labels(false).contains(&"Linking native modules...".to_string()));
    }

    #[test]
    fn test_only_the_clone_stage_creates_the_project_dir() {
        let platform = HostPlatform {
            needs_pod_install: true,
        };
        let plan = build_plan(
            "https://example.com/template.git",
            Path::new("Demo"),
            &answers(),
            platform,
        );
        let flags: Vec<bool> = plan.iter().map(|s| s.creates_project_dir()).collect();
        assert_eq!(flags, vec![true, false, false, false, false]);
    }
}
