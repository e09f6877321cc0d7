use nlq_store::RecordStore;
use nlq_translate::QueryTranslator;
use std::sync::Arc;

/// Shared, read-only dependencies of every handler.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<QueryTranslator>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(translator: QueryTranslator, store: Arc<dyn RecordStore>) -> Self {
        Self {
            translator: Arc::new(translator),
            store,
        }
    }
}
