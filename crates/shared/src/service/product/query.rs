use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        Ok(ApiResponsePagination {
            status: "success".into(),
            message: "Products retrieved".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
            pagination: Pagination::new(req.page, req.limit, total),
        })
    }

    async fn find_all_unpaged(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all_unpaged().await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Products retrieved".into(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product retrieved".into(),
            data: product.into(),
        })
    }
}
