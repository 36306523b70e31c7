use crate::{
    domain::{
        requests::{FindAllUsers, RegisterRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self, search: &str) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, RepositoryError>;
    /// Ids of users whose name, email or phone contains the term
    /// (case-insensitive). Backs the admin order search.
    async fn find_matching_ids(&self, term: &str) -> Result<Vec<i32>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;
}

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
}
