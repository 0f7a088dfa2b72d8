//! Static template registry

/// A registered project template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    /// Identifier used on the command line.
    pub id: &'static str,
    /// Git URL the template is cloned from.
    pub url: &'static str,
    /// Human-readable description shown by `rnkit list`.
    pub description: &'static str,
}

/// Immutable mapping from template identifier to descriptor.
///
/// Constructed once at startup and passed explicitly to the commands
/// that need it. Lookup order matches registration order, which is
/// also the order `rnkit list` prints.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    /// The registry of built-in templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                TemplateDescriptor {
                    id: "default",
                    url: "https://github.com/vihasshah/react-native-template.git",
                    description: "Basic React Native project",
                },
                TemplateDescriptor {
                    id: "typescript",
                    url: "https://github.com/react-native-community/react-native-template-typescript.git",
                    description: "React Native project with TypeScript",
                },
            ],
        }
    }

    /// Look up a template by identifier.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == identifier)
    }

    /// Iterate over all registered templates in registration order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_templates() {
        let registry = TemplateRegistry::builtin();
        let default = registry.resolve("default").unwrap();
        assert!(default.url.ends_with(".git"));
        assert!(registry.resolve("typescript").is_some());
    }

    #[test]
    fn test_unknown_identifier_is_none() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.resolve("does-not-exist").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_iteration_covers_exactly_the_builtins() {
        let registry = TemplateRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["default", "typescript"]);
    }
}
