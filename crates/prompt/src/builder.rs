//! Prompt builder for rendering the translation template.

use crate::schema::CollectionSchema;
use crate::templates::PromptStyle;
use crate::types::{BuiltPrompt, PromptDefinition};
use handlebars::Handlebars;
use nlq_core::{AppError, AppResult};
use std::collections::HashMap;

const TEMPLATE_NAME: &str = "translate";

/// Renders the translation prompt for one question.
///
/// The template is compiled once when the builder is created; each request
/// only supplies the user text.
///
/// # Example
/// ```no_run
/// use nlq_prompt::{CollectionSchema, PromptBuilder, PromptStyle};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = CollectionSchema::students("students");
/// let builder = PromptBuilder::from_style(PromptStyle::Compact, schema)?;
/// let built = builder.build("Show all active users")?;
/// println!("{}", built.user);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PromptBuilder {
    registry: Handlebars<'static>,
    prompt_id: String,
    system: Option<String>,
    schema: CollectionSchema,
}

impl PromptBuilder {
    /// Builder for one of the built-in templates.
    pub fn from_style(style: PromptStyle, schema: CollectionSchema) -> AppResult<Self> {
        Self::new(style.prompt_id(), style.template(), None, schema)
    }

    /// Builder for a template loaded from a YAML definition.
    pub fn from_definition(
        definition: &PromptDefinition,
        schema: CollectionSchema,
    ) -> AppResult<Self> {
        Self::new(
            &definition.id,
            &definition.template,
            definition.system.clone(),
            schema,
        )
    }

    fn new(
        prompt_id: &str,
        template: &str,
        system: Option<String>,
        schema: CollectionSchema,
    ) -> AppResult<Self> {
        let mut registry = Handlebars::new();

        // Disable HTML escaping for plain text
        registry.register_escape_fn(handlebars::no_escape);

        registry
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

        Ok(Self {
            registry,
            prompt_id: prompt_id.to_string(),
            system,
            schema,
        })
    }

    /// Identifier of the template in use.
    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }

    /// The collection this builder describes.
    pub fn schema(&self) -> &CollectionSchema {
        &self.schema
    }

    /// Build the prompt for `user_input`.
    pub fn build(&self, user_input: &str) -> AppResult<BuiltPrompt> {
        tracing::debug!("Building prompt: {}", self.prompt_id);

        let mut variables = HashMap::new();
        variables.insert("user_input".to_string(), user_input.to_string());
        variables.insert("collection".to_string(), self.schema.name.clone());
        variables.insert("fields".to_string(), self.schema.field_lines());
        variables.insert(
            "described_fields".to_string(),
            self.schema.described_field_lines(),
        );

        let rendered = self
            .registry
            .render(TEMPLATE_NAME, &variables)
            .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

        Ok(BuiltPrompt::new(
            self.system.clone(),
            rendered,
            self.prompt_id.clone(),
            self.schema.name.clone(),
            variables,
        ))
    }
}
