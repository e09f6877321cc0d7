//! Request handlers and the query pipeline they share with the CLI.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use nlq_core::{AppError, AppResult, Filter};
use nlq_translate::{validate_question, MISSING_QUERY_MESSAGE};
use serde::Deserialize;
use serde_json::{json, Value};

/// Message returned when a valid filter matches nothing.
pub const NO_DOCUMENTS_MESSAGE: &str = "No documents found.";

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
}

/// The filter that ran and the documents it matched.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub filter: Filter,
    pub documents: Vec<Value>,
}

impl QueryOutcome {
    /// Response body: `{"results": [...]}` or the no-documents message.
    pub fn into_body(self) -> Value {
        if self.documents.is_empty() {
            json!({ "message": NO_DOCUMENTS_MESSAGE })
        } else {
            json!({ "results": self.documents })
        }
    }
}

/// Validate, translate, and run one question against the store.
pub async fn run_query(state: &AppState, question: Option<&str>) -> AppResult<QueryOutcome> {
    let question = validate_question(question)?;
    tracing::info!("Received query: {}", question);

    let translation = state.translator.translate(question).await?;
    let documents = state.store.find(&translation.filter).await?;
    tracing::info!(matched = documents.len(), "Query executed");

    Ok(QueryOutcome {
        filter: translation.filter,
        documents,
    })
}

/// `POST /query`
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            return Err(AppError::InvalidRequest(MISSING_QUERY_MESSAGE.to_string()).into());
        }
    };

    let outcome = run_query(&state, request.query.as_deref()).await?;
    Ok(Json(outcome.into_body()))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.ping().await.map_err(ApiError::unavailable)?;

    Ok(Json(json!({
        "status": "ok",
        "store": state.store.backend_name(),
        "provider": state.translator.provider_name(),
    })))
}
