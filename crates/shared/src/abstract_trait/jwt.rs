use crate::errors::ServiceError;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

/// Identity extracted from a verified bearer credential.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
    pub is_admin: bool,
}

pub trait JwtServiceTrait {
    fn generate_token(&self, user_id: i32, is_admin: bool) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<AuthUser, ServiceError>;
}
