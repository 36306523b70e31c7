use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub order_number: i32,
    pub user_id: i32,
    pub total: i64,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A product/quantity line owned by exactly one order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Order line joined with its product, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItemDetail {
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub quantity: i32,
}

/// Order lifecycle states. Any state may be set from any other; there is
/// deliberately no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProcess,
    ReadyForPickup,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProcess,
        OrderStatus::ReadyForPickup,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProcess => "in_process",
            OrderStatus::ReadyForPickup => "ready_for_pickup",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_process" => Ok(OrderStatus::InProcess),
            "ready_for_pickup" => Ok(OrderStatus::ReadyForPickup),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap();
        assert_eq!(json, "\"ready_for_pickup\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!(serde_json::from_str::<OrderStatus>("\"shipped\"").is_err());
    }
}
