//! Question → filter translation.

use crate::cleaning::parse_reply;
use crate::guard::FilterGuard;
use nlq_core::{AppError, AppResult, Filter};
use nlq_llm::{LlmClient, LlmRequest, LlmUsage};
use nlq_prompt::PromptBuilder;
use std::sync::Arc;

/// Message returned when the request has no usable question.
pub const MISSING_QUERY_MESSAGE: &str = "Missing 'query' in request body";

/// Check the user question before any external call.
///
/// `None`, an empty string and whitespace-only text are all rejected.
pub fn validate_question(question: Option<&str>) -> AppResult<&str> {
    match question {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(AppError::InvalidRequest(MISSING_QUERY_MESSAGE.to_string())),
    }
}

/// Result of translating one question.
#[derive(Debug, Clone)]
pub struct Translation {
    /// Filter to run against the collection
    pub filter: Filter,

    /// Raw model text, before fence stripping
    pub reply: String,

    /// Token usage reported by the provider
    pub usage: LlmUsage,
}

/// Turns a question into a [`Filter`] using the model.
///
/// Holds the process-wide model client; cheap to share behind an `Arc`.
pub struct QueryTranslator {
    llm: Arc<dyn LlmClient>,
    prompt: PromptBuilder,
    model: String,
    guard: Option<FilterGuard>,
}

impl QueryTranslator {
    pub fn new(llm: Arc<dyn LlmClient>, prompt: PromptBuilder, model: impl Into<String>) -> Self {
        Self {
            llm,
            prompt,
            model: model.into(),
            guard: None,
        }
    }

    /// Enable the schema check on generated filters.
    pub fn with_guard(mut self, guard: FilterGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn provider_name(&self) -> &str {
        self.llm.provider_name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the prompt, call the model once, and extract the filter.
    ///
    /// Nothing is retried; the first failure is returned.
    pub async fn translate(&self, question: &str) -> AppResult<Translation> {
        let question = validate_question(Some(question))?;

        let built = self.prompt.build(question)?;
        tracing::debug!(prompt_id = %built.metadata.source_prompt_id, "Prompt built");

        let mut request = LlmRequest::new(built.user, &self.model);
        if let Some(system) = built.system {
            request = request.with_system(system);
        }

        let response = self.llm.complete(&request).await?;
        tracing::debug!("Model reply: {}", response.content);
        tracing::debug!(
            "Token usage - Prompt: {}, Completion: {}, Total: {}",
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );

        let parsed = parse_reply(&response.content)?;
        let filter = Filter::from_reply(parsed)?;

        if let Some(guard) = &self.guard {
            guard.check(&filter)?;
        }

        tracing::info!(filter = %filter, "Generated query");

        Ok(Translation {
            filter,
            reply: response.content,
            usage: response.usage,
        })
    }
}
