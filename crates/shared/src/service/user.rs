use crate::{
    abstract_trait::{DynUserQueryRepository, UserQueryServiceTrait},
    domain::{
        requests::FindAllUsers,
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct UserQueryService {
    query: DynUserQueryRepository,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let users = self.query.find_all(req.search.trim()).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Users retrieved".into(),
            data: users.into_iter().map(UserResponse::from).collect(),
        })
    }
}
