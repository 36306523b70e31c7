use crate::{
    abstract_trait::jwt::AuthUser,
    domain::{
        requests::{CreateOrderRequest, FindAllOrders},
        responses::{ApiResponse, MonthlySales, OrderResponse, OrderStatsResponse, TopProduct},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItemDetail, OrderStatus},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderStatsRepository = Arc<dyn OrderStatsRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;
pub type DynOrderStatsService = Arc<dyn OrderStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// All orders, newest first.
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_user_ids(&self, user_ids: &[i32]) -> Result<Vec<Order>, RepositoryError>;
    /// Orders whose display id ends with the given digits, newest first.
    /// Unindexed scan; fine at this data volume.
    async fn find_by_number_suffix(&self, suffix: &str) -> Result<Vec<Order>, RepositoryError>;
    async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError>;
    /// Product-joined lines for a set of orders.
    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItemDetail>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the order and its lines in one transaction; the display
    /// number is assigned inside the same transaction.
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<Order, RepositoryError>;
    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, RepositoryError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueTotals {
    pub total: i64,
    pub daily: i64,
    pub weekly: i64,
    pub monthly: i64,
}

#[derive(Debug, Clone)]
pub struct MonthBucket {
    pub month: NaiveDate,
    pub total: i64,
}

#[async_trait]
pub trait OrderStatsRepositoryTrait {
    async fn revenue_totals(&self) -> Result<RevenueTotals, RepositoryError>;
    async fn count_by_status(&self) -> Result<Vec<(String, i64)>, RepositoryError>;
    /// Month-start buckets with summed totals, for orders created on or
    /// after `from`. Months without sales are absent.
    async fn monthly_totals(&self, from: NaiveDate) -> Result<Vec<MonthBucket>, RepositoryError>;
    async fn top_products(&self, limit: i64) -> Result<Vec<(String, i64)>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    /// Admin listing with the search/user filter, user and product detail
    /// populated.
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    /// One order; non-admins may only see their own.
    async fn find_by_id(
        &self,
        id: i32,
        auth: AuthUser,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_my(&self, user_id: i32) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderStatsServiceTrait {
    async fn stats(&self) -> Result<ApiResponse<OrderStatsResponse>, ServiceError>;
    async fn sales_by_month(&self) -> Result<ApiResponse<Vec<MonthlySales>>, ServiceError>;
    async fn top_products(&self) -> Result<ApiResponse<Vec<TopProduct>>, ServiceError>;
}
