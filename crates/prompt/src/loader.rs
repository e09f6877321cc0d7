//! Prompt loader for YAML prompt definitions.

use crate::types::PromptDefinition;
use nlq_core::{AppError, AppResult};
use std::path::Path;

/// Load a prompt definition from a YAML file.
///
/// The template must reference `{{user_input}}`; a template that ignores the
/// question would send the same prompt for every request.
///
/// # Example
/// ```no_run
/// use nlq_prompt::load_prompt;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let prompt = load_prompt(Path::new("prompts/school.yml"))?;
/// println!("Loaded prompt: {}", prompt.title);
/// # Ok(())
/// # }
/// ```
pub fn load_prompt(prompt_file: &Path) -> AppResult<PromptDefinition> {
    tracing::debug!("Loading prompt from: {:?}", prompt_file);

    if !prompt_file.exists() {
        return Err(AppError::Prompt(format!(
            "Prompt file not found: {:?}",
            prompt_file
        )));
    }

    let contents = std::fs::read_to_string(prompt_file).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to read prompt file {:?}: {}",
            prompt_file, e
        ))
    })?;

    let definition: PromptDefinition = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to parse prompt YAML {:?}: {}",
            prompt_file, e
        ))
    })?;

    validate_prompt(&definition)?;

    tracing::info!("Loaded prompt: {} ({})", definition.id, definition.title);

    Ok(definition)
}

/// Validate a prompt definition.
fn validate_prompt(def: &PromptDefinition) -> AppResult<()> {
    if def.id.is_empty() {
        return Err(AppError::Prompt("Prompt ID cannot be empty".to_string()));
    }

    if def.title.is_empty() {
        return Err(AppError::Prompt("Prompt title cannot be empty".to_string()));
    }

    if def.api_version.is_empty() {
        return Err(AppError::Prompt(
            "Prompt apiVersion cannot be empty".to_string(),
        ));
    }

    if def.template.is_empty() {
        return Err(AppError::Prompt(
            "Prompt template cannot be empty".to_string(),
        ));
    }

    // Validate API version format (simple check)
    if !def.api_version.contains('.') {
        return Err(AppError::Prompt(format!(
            "Invalid apiVersion format: {}. Expected format: 'x.y'",
            def.api_version
        )));
    }

    if !def.template.contains("{{user_input}}") {
        return Err(AppError::Prompt(format!(
            "Prompt template {} must reference {{{{user_input}}}}",
            def.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_prompt(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_prompt(
            temp_dir.path(),
            "school.yml",
            r#"
id: school.translate
title: "School Translator"
apiVersion: "1.0"
template: |
  Fields of {{collection}}:
  {{fields}}
  Input: {{user_input}}
  Output:
"#,
        );

        let prompt = load_prompt(&path).unwrap();
        assert_eq!(prompt.id, "school.translate");
        assert_eq!(prompt.title, "School Translator");
        assert!(prompt.template.contains("{{user_input}}"));
    }

    #[test]
    fn test_load_nonexistent_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_prompt(&temp_dir.path().join("missing.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_prompt(temp_dir.path(), "invalid.yml", "invalid: yaml: content:");
        assert!(load_prompt(&path).is_err());
    }

    #[test]
    fn test_template_must_use_user_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_prompt(
            temp_dir.path(),
            "static.yml",
            r#"
id: static
title: Static
apiVersion: "1.0"
template: "Always the same question"
"#,
        );

        let err = load_prompt(&path).unwrap_err();
        assert!(err.to_string().contains("{{user_input}}"));
    }

    #[test]
    fn test_bad_api_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_prompt(
            temp_dir.path(),
            "v.yml",
            r#"
id: v
title: V
apiVersion: "1"
template: "{{user_input}}"
"#,
        );

        assert!(load_prompt(&path).is_err());
    }
}
