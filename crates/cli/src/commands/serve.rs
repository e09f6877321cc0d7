use crate::context::build_state;
use clap::Args;
use nlq_core::{config::AppConfig, AppResult};

/// Run the HTTP service
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Address to listen on (default 127.0.0.1:8000)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing serve command");

        // Fails before binding when credentials are missing
        let state = build_state(config).await?;
        let addr = config.bind_addr()?;

        nlq_server::serve(addr, state).await
    }
}
