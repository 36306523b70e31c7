use crate::domain::responses::OrderResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderStatsResponse {
    pub total_revenue: i64,
    pub daily_revenue: i64,
    pub weekly_revenue: i64,
    pub monthly_revenue: i64,
    pub total_orders: i64,
    pub orders_by_status: Vec<StatusCount>,
    pub recent: Vec<OrderResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// One bucket of the last-12-months sales series. `label` is the short
/// month form the dashboard renders on the axis (e.g. "Mar 26").
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MonthlySales {
    pub label: String,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TopProduct {
    pub name: String,
    pub count: i64,
}
