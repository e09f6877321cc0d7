//! Prompt system for the NLQ service.
//!
//! This crate turns a natural-language question into the instruction sent to
//! the model:
//! - Built-in compact and detailed translation templates
//! - Collection schema description (field names and types)
//! - Handlebars template rendering
//! - YAML template overrides

pub mod builder;
pub mod loader;
pub mod schema;
pub mod templates;
pub mod types;

// Re-export main types
pub use builder::PromptBuilder;
pub use loader::load_prompt;
pub use schema::{CollectionSchema, FieldKind, FieldSpec};
pub use templates::PromptStyle;
pub use types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
