use crate::{
    abstract_trait::storage::UploadedFile,
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Filtered page slice plus the total count matching the filter.
    async fn find_all(&self, req: &FindAllProducts) -> Result<(Vec<Product>, i64), RepositoryError>;
    /// Unpaginated listing for the admin view, newest first.
    async fn find_all_unpaged(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<String>,
    ) -> Result<Product, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        image: Option<String>,
    ) -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_all_unpaged(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateProductRequest,
        image: Option<UploadedFile>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
