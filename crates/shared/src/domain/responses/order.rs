use crate::model::{Order, OrderItemDetail, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order as exposed to clients, with the owner and the product lines
/// populated the way the storefront expects them.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    /// Human-facing sequential display id (e.g. shown as "#1007").
    pub order_number: i32,
    pub user: Option<OrderUserResponse>,
    pub items: Vec<OrderItemResponse>,
    pub total: i64,
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderUserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub quantity: i32,
}

impl From<&User> for OrderUserResponse {
    fn from(value: &User) -> Self {
        OrderUserResponse {
            id: value.user_id,
            name: value.name.clone(),
            email: value.email.clone(),
        }
    }
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            name: value.name,
            price: value.price,
            image: value.image,
            quantity: value.quantity,
        }
    }
}

impl OrderResponse {
    pub fn assemble(
        order: Order,
        user: Option<OrderUserResponse>,
        items: Vec<OrderItemResponse>,
    ) -> Self {
        OrderResponse {
            id: order.order_id,
            order_number: order.order_number,
            user,
            items,
            total: order.total,
            status: order.status,
            created_at: order.created_at.map(|dt| dt.to_string()),
        }
    }
}
