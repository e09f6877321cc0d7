//! In-memory store seeded from a JSON file.
//!
//! Used for local development and tests when no MongoDB is available.

use crate::matcher::matches;
use crate::traits::RecordStore;
use nlq_core::{AppError, AppResult, Filter};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<Value>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Value>) -> Self {
        Self { documents }
    }

    /// Load documents from a file holding a JSON array of objects.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;

        let Value::Array(documents) = value else {
            return Err(AppError::Config(format!(
                "Seed file {} must contain a JSON array",
                path.display()
            )));
        };
        if let Some(index) = documents.iter().position(|d| !d.is_object()) {
            return Err(AppError::Config(format!(
                "Seed file {}: element {} is not an object",
                path.display(),
                index
            )));
        }

        tracing::info!("Loaded {} documents from {}", documents.len(), path.display());
        Ok(Self::new(documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    fn backend_name(&self) -> &str {
        "memory"
    }

    async fn find(&self, filter: &Filter) -> AppResult<Vec<Value>> {
        let mut results = Vec::new();
        for doc in &self.documents {
            if matches(doc, filter.as_map())? {
                results.push(doc.clone());
            }
        }
        tracing::debug!("Memory store matched {} of {}", results.len(), self.len());
        Ok(results)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
