use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFileStorage = Arc<dyn FileStorageTrait + Send + Sync>;

/// An uploaded file as it arrives from the multipart boundary.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// File-storage collaborator: accepts a file, returns the public URL or
/// path the stored copy is served from.
#[async_trait]
pub trait FileStorageTrait {
    async fn store(&self, file: UploadedFile) -> Result<String, ServiceError>;
}
