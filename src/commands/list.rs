//! Template listing command

use console::style;

use rnkit_lib::TemplateRegistry;

/// Print the available templates
pub struct ListCommand;

impl ListCommand {
    /// Execute the command
    ///
    /// Pure output: prints a heading followed by one line per
    /// registered template, nothing else.
    pub fn execute(registry: &TemplateRegistry) {
        println!("{}", style("Available templates:").bold());
        println!();
        for line in Self::render_lines(registry) {
            println!("{line}");
        }
        println!();
    }

    /// Build one output line per registered template, in registration
    /// order.
    fn render_lines(registry: &TemplateRegistry) -> Vec<String> {
        registry
            .iter()
            .map(|template| {
                format!(
                    "  {:<12} {}",
                    style(template.id).cyan().bold(),
                    template.description
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_exactly_the_registered_templates() {
        let registry = TemplateRegistry::builtin();
        let lines = ListCommand::render_lines(&registry);

        assert_eq!(lines.len(), 2, "one line per registered template");
        assert!(lines[0].contains("default"));
        assert!(lines[0].contains("Basic React Native project"));
        assert!(lines[1].contains("typescript"));
        assert!(lines[1].contains("React Native project with TypeScript"));
    }

    #[test]
    fn test_lines_follow_registration_order() {
        let registry = TemplateRegistry::builtin();
        let lines = ListCommand::render_lines(&registry);
        let ids: Vec<&str> = registry.iter().map(|t| t.id).collect();

        for (line, id) in lines.iter().zip(ids) {
            assert!(line.contains(id));
        }
    }
}
