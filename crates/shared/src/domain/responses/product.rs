use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub pages: i32,
    pub image: Option<String>,
    pub category: String,
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            pages: value.pages,
            image: value.image,
            category: value.category,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
