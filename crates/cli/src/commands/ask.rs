//! Ask command handler.
//!
//! Runs one question through the same pipeline as `POST /query` and prints
//! the response body the endpoint would return.

use crate::context::build_state;
use clap::Args;
use nlq_core::{config::AppConfig, AppError, AppResult};
use nlq_server::run_query;
use serde_json::json;

/// Translate and run a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question, e.g. "Find student named Alice"
    pub question: String,

    /// Print the generated filter to stderr
    #[arg(long)]
    pub show_filter: bool,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl AskCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let state = build_state(config).await?;

        match run_query(&state, Some(self.question.as_str())).await {
            Ok(outcome) => {
                if self.show_filter {
                    eprintln!("Filter: {}", outcome.filter);
                }
                self.print(&outcome.into_body())
            }
            Err(e) => {
                self.print(&json!({ "error": e.to_string() }))?;
                Err(e)
            }
        }
    }

    fn print(&self, body: &serde_json::Value) -> AppResult<()> {
        let text = if self.compact {
            serde_json::to_string(body)
        } else {
            serde_json::to_string_pretty(body)
        }
        .map_err(|e| AppError::Serialization(e.to_string()))?;
        println!("{}", text);
        Ok(())
    }
}
