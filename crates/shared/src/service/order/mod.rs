mod command;
mod query;
mod stats;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;
pub use self::stats::OrderStatsService;

use crate::{
    abstract_trait::{DynOrderQueryRepository, DynUserQueryRepository},
    domain::responses::{OrderItemResponse, OrderResponse, OrderUserResponse},
    errors::ServiceError,
    model::Order,
};
use std::collections::HashMap;

/// Joins a batch of orders with their owners and product lines. Orders whose
/// owner no longer resolves are kept with `user: None`.
async fn assemble_orders(
    order_query: &DynOrderQueryRepository,
    user_query: &DynUserQueryRepository,
    orders: Vec<Order>,
) -> Result<Vec<OrderResponse>, ServiceError> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
    let mut user_ids: Vec<i32> = orders.iter().map(|o| o.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();

    let items = order_query.find_items(&order_ids).await?;
    let users = user_query.find_by_ids(&user_ids).await?;

    let users_by_id: HashMap<i32, OrderUserResponse> = users
        .iter()
        .map(|u| (u.user_id, OrderUserResponse::from(u)))
        .collect();

    let mut items_by_order: HashMap<i32, Vec<OrderItemResponse>> = HashMap::new();
    for item in items {
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(item.into());
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let user = users_by_id.get(&order.user_id).cloned();
            let items = items_by_order.remove(&order.order_id).unwrap_or_default();
            OrderResponse::assemble(order, user, items)
        })
        .collect())
}
