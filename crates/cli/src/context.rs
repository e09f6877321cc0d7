//! Startup wiring: turns a validated config into the shared components.

use nlq_core::{config::AppConfig, AppError, AppResult};
use nlq_llm::{create_client, LlmClient};
use nlq_prompt::{load_prompt, CollectionSchema, PromptBuilder, PromptStyle};
use nlq_server::AppState;
use nlq_store::create_store;
use nlq_translate::{FilterGuard, QueryTranslator};
use std::sync::Arc;

/// Model client for the configured provider.
pub fn build_llm(config: &AppConfig) -> AppResult<Arc<dyn LlmClient>> {
    create_client(
        &config.provider,
        config.llm_endpoint.as_deref(),
        config.api_key.as_deref(),
    )
}

/// Prompt builder from the prompt file if one is set, otherwise the built-in style.
pub fn build_prompt(config: &AppConfig) -> AppResult<PromptBuilder> {
    let schema = CollectionSchema::students(config.collection.clone());

    match &config.prompt_file {
        Some(path) => {
            let definition = load_prompt(path)?;
            tracing::info!("Using prompt '{}' from {}", definition.id, path.display());
            PromptBuilder::from_definition(&definition, schema)
        }
        None => {
            let style = PromptStyle::parse(&config.prompt_style).ok_or_else(|| {
                AppError::Config(format!("Unknown prompt style: {}", config.prompt_style))
            })?;
            PromptBuilder::from_style(style, schema)
        }
    }
}

pub fn build_translator(config: &AppConfig, llm: Arc<dyn LlmClient>) -> AppResult<QueryTranslator> {
    let prompt = build_prompt(config)?;
    let schema = prompt.schema().clone();
    let translator = QueryTranslator::new(llm, prompt, &config.model);

    if config.strict_fields {
        tracing::info!("Schema guard enabled for generated filters");
        Ok(translator.with_guard(FilterGuard::new(schema)))
    } else {
        tracing::warn!("Generated filters run unchecked; set prompt.strictFields to restrict them");
        Ok(translator)
    }
}

/// Validate `config` and build everything a request needs.
pub async fn build_state(config: &AppConfig) -> AppResult<AppState> {
    config.validate()?;

    let llm = build_llm(config)?;
    let translator = build_translator(config, llm)?;
    let store = create_store(config).await?;

    tracing::info!(
        provider = %translator.provider_name(),
        model = %translator.model(),
        store = %store.backend_name(),
        "Components ready"
    );

    Ok(AppState::new(translator, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn memory_config(seed: &NamedTempFile) -> AppConfig {
        AppConfig {
            provider: "ollama".to_string(),
            store: "memory".to_string(),
            seed_file: Some(seed.path().to_path_buf()),
            ..AppConfig::default()
        }
    }

    fn seed_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Alice", "status": "active"}}]"#).unwrap();
        file
    }

    #[tokio::test]
    async fn test_build_state_with_memory_store() {
        let seed = seed_file();
        let state = build_state(&memory_config(&seed)).await.unwrap();

        assert_eq!(state.store.backend_name(), "memory");
        assert_eq!(state.translator.provider_name(), "ollama");
        assert_eq!(state.translator.model(), "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_build_state_rejects_missing_credentials() {
        let config = AppConfig::default();
        assert!(matches!(
            build_state(&config).await,
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_prompt_file_overrides_style() {
        let mut prompt = NamedTempFile::new().unwrap();
        write!(
            prompt,
            "id: custom.students\ntitle: Custom\napiVersion: \"1.0\"\ntemplate: \"{{{{collection}}}}: {{{{user_input}}}}\"\n"
        )
        .unwrap();

        let seed = seed_file();
        let config = AppConfig {
            prompt_file: Some(prompt.path().to_path_buf()),
            ..memory_config(&seed)
        };
        let builder = build_prompt(&config).unwrap();
        assert_eq!(builder.prompt_id(), "custom.students");
        assert_eq!(builder.build("active").unwrap().user, "students: active");
    }
}
