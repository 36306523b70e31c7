use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct FindAllOrders {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItem {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    #[validate(nested)]
    pub items: Vec<CreateOrderItem>,

    /// Computed by the caller, stored as-is.
    #[validate(range(min = 0, message = "Total must not be negative"))]
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_list_fails_validation() {
        let req = CreateOrderRequest {
            items: vec![],
            total: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let req = CreateOrderRequest {
            items: vec![CreateOrderItem {
                product_id: 1,
                quantity: 0,
            }],
            total: 100,
        };
        assert!(req.validate().is_err());
    }
}
