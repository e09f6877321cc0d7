use crate::memory::MemoryStore;
use crate::mongo::MongoStore;
use crate::traits::RecordStore;
use nlq_core::{AppConfig, AppError, AppResult};
use std::sync::Arc;

/// Build the store selected by `config.store`.
pub async fn create_store(config: &AppConfig) -> AppResult<Arc<dyn RecordStore>> {
    match config.store.to_lowercase().as_str() {
        "mongo" => {
            let uri = config.mongo_uri.as_deref().ok_or_else(|| {
                AppError::Config(format!("{} is not set", config.uri_env))
            })?;
            let store = MongoStore::connect(uri, &config.database, &config.collection).await?;
            Ok(Arc::new(store))
        }
        "memory" => {
            let path = config.seed_file.as_deref().ok_or_else(|| {
                AppError::Config("Memory store requires a seed file".to_string())
            })?;
            Ok(Arc::new(MemoryStore::from_file(path)?))
        }
        other => Err(AppError::Config(format!("Unknown store backend: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn config(store: &str, seed_file: Option<PathBuf>) -> AppConfig {
        AppConfig {
            store: store.to_string(),
            seed_file,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_memory_store_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Alice"}}]"#).unwrap();

        let store = create_store(&config("memory", Some(file.path().to_path_buf())))
            .await
            .unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_settings() {
        assert!(matches!(
            create_store(&config("memory", None)).await,
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            create_store(&config("mongo", None)).await,
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            create_store(&config("redis", None)).await,
            Err(AppError::Config(_))
        ));
    }
}
