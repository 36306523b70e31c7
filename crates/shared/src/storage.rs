use crate::{
    abstract_trait::{FileStorageTrait, UploadedFile},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

/// Stores uploaded product images on the local filesystem. Files are served
/// back under `/uploads/{name}` by the HTTP layer.
#[derive(Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn unique_name(filename: &str) -> String {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        format!("{}-{}{}", Utc::now().timestamp_millis(), Uuid::new_v4(), ext)
    }
}

#[async_trait]
impl FileStorageTrait for LocalStorage {
    async fn store(&self, file: UploadedFile) -> Result<String, ServiceError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            error!("❌ Failed to create upload directory: {}", e);
            ServiceError::Custom(format!("Failed to create upload directory: {e}"))
        })?;

        let name = Self::unique_name(&file.filename);
        let path = self.dir.join(&name);

        tokio::fs::write(&path, &file.bytes).await.map_err(|e| {
            error!("❌ Failed to write upload {}: {}", path.display(), e);
            ServiceError::Custom(format!("Failed to store file: {e}"))
        })?;

        info!("✅ Stored upload {} ({} bytes)", name, file.bytes.len());
        Ok(format!("/uploads/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn unique_name_keeps_extension() {
        let name = LocalStorage::unique_name("menu.png");
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn unique_name_without_extension() {
        let name = LocalStorage::unique_name("README");
        assert!(!name.contains('.'));
    }

    #[tokio::test]
    async fn store_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn FileStorageTrait + Send + Sync> =
            Arc::new(LocalStorage::new(dir.path()));

        let url = storage
            .store(UploadedFile {
                filename: "flyer.jpg".to_string(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".jpg"));

        let name = url.trim_start_matches("/uploads/");
        let written = tokio::fs::read(dir.path().join(name)).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }
}
