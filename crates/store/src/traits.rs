use nlq_core::{AppResult, Filter};
use serde_json::Value;

/// Read access to the student collection.
///
/// One store is built at startup and shared by every request, so
/// implementations must be safe for concurrent use.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Backend name for logs and health output ("mongo", "memory").
    fn backend_name(&self) -> &str;

    /// Documents matching `filter`, in store order, as plain JSON.
    async fn find(&self, filter: &Filter) -> AppResult<Vec<Value>>;

    /// Check the backend is reachable.
    async fn ping(&self) -> AppResult<()>;
}
