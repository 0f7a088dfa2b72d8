//! Package manifest rendering

use std::fmt::Display;
use std::fs;
use std::path::Path;

use handlebars::Handlebars;

use crate::error::ScaffoldError;
use crate::prompts::AnswerSet;

/// Render the placeholders in a generated package manifest in place.
///
/// The manifest is read as text, rendered as a handlebars template
/// against [`AnswerSet::manifest_context`], and written back. HTML
/// escaping is disabled and unmatched placeholders render as the empty
/// string, matching the templating convention the templates are
/// written against.
///
/// # Errors
///
/// Returns [`ScaffoldError::Manifest`] when the file is missing,
/// unreadable, unwritable, or the template itself is malformed. All of
/// these are fatal to the command and trigger rollback upstream.
pub fn render(path: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
    let text = fs::read_to_string(path).map_err(|err| manifest_error(path, &err))?;

    let mut handlebars = Handlebars::new();
    // The manifest is JSON, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    let rendered = handlebars
        .render_template(&text, &answers.manifest_context())
        .map_err(|err| manifest_error(path, &err))?;

    fs::write(path, rendered).map_err(|err| manifest_error(path, &err))?;

    Ok(())
}

fn manifest_error(path: &Path, detail: &impl Display) -> ScaffoldError {
    ScaffoldError::Manifest {
        path: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn answers() -> AnswerSet {
        AnswerSet {
            project_name: "Shopper".to_string(),
            app_id: "com.shopper".to_string(),
            description: "A shopping list".to_string(),
            author: "Sam Doe".to_string(),
            app_type: Some("default".to_string()),
        }
    }

    #[test]
    fn test_render_substitutes_collected_answers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(
            &path,
            r#"{"name": "{{name}}", "description": "{{description}}", "author": "{{author}}"}"#,
        )
        .unwrap();

        render(&path, &answers()).unwrap();

        let rendered = fs::read_to_string(&path).unwrap();
        assert_eq!(
            rendered,
            r#"{"name": "Shopper", "description": "A shopping list", "author": "Sam Doe"}"#
        );
    }

    #[test]
    fn test_app_id_placeholder_renders_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "{{name}}", "bundle": "{{appId}}"}"#).unwrap();

        render(&path, &answers()).unwrap();

        let rendered = fs::read_to_string(&path).unwrap();
        assert_eq!(rendered, r#"{"name": "Shopper", "bundle": ""}"#);
    }

    #[test]
    fn test_unmatched_placeholders_render_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"homepage": "{{homepage}}"}"#).unwrap();

        render(&path, &answers()).unwrap();

        let rendered = fs::read_to_string(&path).unwrap();
        assert_eq!(rendered, r#"{"homepage": ""}"#);
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{{author}}").unwrap();

        let mut with_quotes = answers();
        with_quotes.author = r#"Sam "Slam" Doe & co"#.to_string();
        render(&path, &with_quotes).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"Sam "Slam" Doe & co"#
        );
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        let err = render(&path, &answers()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Manifest { .. }));
    }
}
