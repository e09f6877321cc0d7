//! LLM integration crate for the NLQ service.
//!
//! This crate provides a provider-agnostic abstraction over the
//! text-generation service that turns questions into filters.
//!
//! # Providers
//! - **Gemini**: Google Generative Language API (default)
//! - **Ollama**: local LLM runtime
//!
//! # Example
//! ```no_run
//! use nlq_llm::{LlmClient, LlmRequest, providers::GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("api-key");
//! let request = LlmRequest::new("Say hello", "gemini-1.5-flash");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{GeminiClient, OllamaClient};
pub use types::ProviderType;
