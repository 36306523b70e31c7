use super::assemble_orders;
use crate::{
    abstract_trait::{
        AuthUser, DynOrderQueryRepository, DynUserQueryRepository, OrderQueryServiceTrait,
    },
    domain::{
        requests::FindAllOrders,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Order,
    utils::display_id_suffix,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    order_query: DynOrderQueryRepository,
    user_query: DynUserQueryRepository,
}

impl OrderQueryService {
    pub fn new(order_query: DynOrderQueryRepository, user_query: DynUserQueryRepository) -> Self {
        Self {
            order_query,
            user_query,
        }
    }

    async fn search(&self, term: &str) -> Result<Vec<Order>, ServiceError> {
        if let Some(suffix) = display_id_suffix(term) {
            info!("🔍 Order search by display-id suffix '{suffix}'");
            return Ok(self.order_query.find_by_number_suffix(suffix).await?);
        }

        let user_ids = self.user_query.find_matching_ids(term.trim()).await?;
        if user_ids.is_empty() {
            // No user matched; skip the order scan entirely.
            return Ok(Vec::new());
        }

        Ok(self.order_query.find_by_user_ids(&user_ids).await?)
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = if let Some(user_id) = req.user_id {
            self.order_query.find_by_user(user_id).await?
        } else if req.search.trim().is_empty() {
            self.order_query.find_all().await?
        } else {
            self.search(&req.search).await?
        };

        let data = assemble_orders(&self.order_query, &self.user_query, orders).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Orders retrieved".into(),
            data,
        })
    }

    async fn find_by_id(
        &self,
        id: i32,
        auth: AuthUser,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .order_query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if !auth.is_admin && order.user_id != auth.user_id {
            return Err(ServiceError::Forbidden(
                "You may only view your own orders".into(),
            ));
        }

        let mut assembled =
            assemble_orders(&self.order_query, &self.user_query, vec![order]).await?;
        let data = assembled
            .pop()
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order retrieved".into(),
            data,
        })
    }

    async fn find_my(&self, user_id: i32) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.order_query.find_by_user(user_id).await?;
        let data = assemble_orders(&self.order_query, &self.user_query, orders).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Orders retrieved".into(),
            data,
        })
    }
}
