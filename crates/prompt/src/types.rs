//! Prompt types for the NLQ service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A prompt definition loaded from YAML, replacing the built-in template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Unique prompt identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// API version for schema evolution
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Creator identifier
    #[serde(rename = "createdBy", default)]
    pub created_by: String,

    /// Optional system instruction sent alongside the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Template string with Handlebars syntax
    pub template: String,
}

/// A fully built prompt ready for LLM execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// System message (optional)
    pub system: Option<String>,

    /// User message (required)
    pub user: String,

    /// Metadata about the built prompt
    pub metadata: BuiltPromptMetadata,
}

/// Metadata about a built prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPromptMetadata {
    /// Source prompt ID
    #[serde(rename = "sourcePromptId")]
    pub source_prompt_id: String,

    /// Collection the prompt targets
    pub collection: String,

    /// Template variables that were resolved
    #[serde(rename = "resolvedVariables")]
    pub resolved_variables: HashMap<String, String>,
}

impl BuiltPrompt {
    /// Create a new built prompt.
    pub fn new(
        system: Option<String>,
        user: String,
        source_prompt_id: String,
        collection: String,
        resolved_variables: HashMap<String, String>,
    ) -> Self {
        Self {
            system,
            user,
            metadata: BuiltPromptMetadata {
                source_prompt_id,
                collection,
                resolved_variables,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_definition_deserialization() {
        let yaml = r#"
id: school.translate
title: School Translator
apiVersion: "1.0"
createdBy: registrar
system: Reply with JSON only.
template: "Question: {{user_input}}"
"#;

        let def: PromptDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.id, "school.translate");
        assert_eq!(def.api_version, "1.0");
        assert_eq!(def.system.as_deref(), Some("Reply with JSON only."));
        assert_eq!(def.template, "Question: {{user_input}}");
    }

    #[test]
    fn test_built_prompt_creation() {
        let mut vars = HashMap::new();
        vars.insert("user_input".to_string(), "test".to_string());

        let built = BuiltPrompt::new(
            None,
            "User message".to_string(),
            "nlq.translate.compact".to_string(),
            "students".to_string(),
            vars,
        );

        assert_eq!(built.system, None);
        assert_eq!(built.user, "User message");
        assert_eq!(built.metadata.source_prompt_id, "nlq.translate.compact");
        assert_eq!(built.metadata.collection, "students");
        assert_eq!(
            built.metadata.resolved_variables.get("user_input"),
            Some(&"test".to_string())
        );
    }
}
