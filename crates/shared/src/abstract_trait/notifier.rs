use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynNotifier = Arc<dyn NotifierTrait + Send + Sync>;

/// Outbound notification collaborator. Callers treat failures as
/// log-and-continue; nothing downstream depends on delivery.
#[async_trait]
pub trait NotifierTrait {
    async fn send(&self, to: &str, subject: &str, html_body: String) -> Result<(), ServiceError>;
}
