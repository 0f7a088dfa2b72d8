//! Project initialization command

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use rnkit_lib::pipeline::{build_plan, Pipeline};
use rnkit_lib::{prompts, HostPlatform, ScaffoldError, TemplateRegistry};

/// Initialize a new project from a remote template
pub struct InitCommand {
    name: String,
    template: String,
}

impl InitCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Project name (must be a valid React Native app name)
    /// * `template` - Template identifier to resolve against the registry
    ///
    /// # Errors
    ///
    /// Returns an error when the project name is not a valid app name.
    pub fn new(name: String, template: String) -> Result<Self> {
        // React Native package tooling rejects anything but [A-Za-z][A-Za-z0-9]*
        if !is_valid_app_name(&name) {
            anyhow::bail!(
                "Invalid project name: {name}. Must start with a letter and contain only letters and digits."
            );
        }

        Ok(Self { name, template })
    }

    /// Execute the command
    ///
    /// Resolves the template, collects the operator's answers, then
    /// drives the scaffolding pipeline. Any pipeline failure after the
    /// clone has landed rolls the project directory back before the
    /// error is reported.
    ///
    /// # Errors
    ///
    /// Returns an error when the template is unknown, a prompt is
    /// interrupted, or any pipeline stage fails.
    pub fn execute(&self, registry: &TemplateRegistry) -> Result<()> {
        let template = registry
            .resolve(&self.template)
            .ok_or_else(|| ScaffoldError::UnknownTemplate(self.template.clone()))?;

        println!(
            "{} {} {}",
            style("Initializing").green().bold(),
            style("project:").bold(),
            style(&self.name).cyan().bold()
        );
        println!();

        // The single interactive point; nothing is on disk yet.
        let answers = prompts::collect(&self.name)?;
        println!();

        let project_dir = PathBuf::from(&self.name);
        let platform = HostPlatform::detect();
        let plan = build_plan(template.url, &project_dir, &answers, platform);

        Pipeline::new(project_dir, plan).run()?;

        self.print_success();

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!();
        println!(
            "{}",
            style("✓ Project initialized successfully!").green().bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("cd {}", self.name)).cyan()
        );
        println!(
            "  {} {}",
            style("$").dim(),
            style("npx react-native start").cyan()
        );
        println!();
    }
}

/// Validate that a string is a valid React Native app name
fn is_valid_app_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_app_names() {
        assert!(is_valid_app_name("MyApp"));
        assert!(is_valid_app_name("myapp"));
        assert!(is_valid_app_name("App2"));
        assert!(is_valid_app_name("a"));
    }

    #[test]
    fn test_invalid_app_names() {
        assert!(!is_valid_app_name(""));
        assert!(!is_valid_app_name("2fast")); // starts with digit
        assert!(!is_valid_app_name("my app")); // space
        assert!(!is_valid_app_name("my-app")); // hyphen
        assert!(!is_valid_app_name("my.app")); // dot
        assert!(!is_valid_app_name("my_app")); // underscore
    }

    #[test]
    fn test_new_command_validates_name() {
        assert!(InitCommand::new("my app".to_string(), "default".to_string()).is_err());
        assert!(InitCommand::new("MyApp".to_string(), "default".to_string()).is_ok());
    }

    #[test]
    fn test_unknown_template_aborts_before_any_side_effect() {
        let registry = TemplateRegistry::builtin();
        let cmd = InitCommand::new("MyApp".to_string(), "nope".to_string()).unwrap();
        let err = cmd.execute(&registry).unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(!std::path::Path::new("MyApp").exists());
    }
}
