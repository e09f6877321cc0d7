//! Check command handler.
//!
//! Sends a short greeting prompt to the model and pings the store, reporting
//! each result. Useful for verifying credentials before serving.

use crate::context::build_llm;
use clap::Args;
use nlq_core::{config::AppConfig, AppError, AppResult};
use nlq_llm::LlmRequest;
use nlq_store::create_store;

const GREETING_PROMPT: &str = "Say hello from the new project";

/// Check model and store connectivity
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Only check the model
    #[arg(long, conflicts_with = "store_only")]
    pub llm_only: bool,

    /// Only check the store
    #[arg(long)]
    pub store_only: bool,
}

impl CheckCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing check command");
        config.validate()?;

        let mut failures = 0;

        if !self.store_only {
            match self.check_llm(config).await {
                Ok(reply) => {
                    println!("LLM ({} / {}): ok", config.provider, config.model);
                    println!("  {}", reply);
                }
                Err(e) => {
                    failures += 1;
                    println!("LLM ({} / {}): FAILED", config.provider, config.model);
                    println!("  {}", e);
                }
            }
        }

        if !self.llm_only {
            let target = format!("{}.{}", config.database, config.collection);
            match self.check_store(config).await {
                Ok(backend) => println!("Store ({}, {}): ok", backend, target),
                Err(e) => {
                    failures += 1;
                    println!("Store ({}, {}): FAILED", config.store, target);
                    println!("  {}", e);
                }
            }
        }

        if failures > 0 {
            return Err(AppError::Other(format!("{} check(s) failed", failures)));
        }
        Ok(())
    }

    async fn check_llm(&self, config: &AppConfig) -> AppResult<String> {
        let client = build_llm(config)?;
        let request = LlmRequest::new(GREETING_PROMPT, &config.model).with_max_tokens(64);
        let response = client.complete(&request).await?;
        Ok(response.content.trim().to_string())
    }

    async fn check_store(&self, config: &AppConfig) -> AppResult<String> {
        let store = create_store(config).await?;
        store.ping().await?;
        Ok(store.backend_name().to_string())
    }
}
