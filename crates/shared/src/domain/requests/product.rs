use crate::model::ProductCategory;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,

    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub category: Option<ProductCategory>,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    12
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: String::new(),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 1, message = "Pages must be at least 1"))]
    pub pages: i32,

    pub category: ProductCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 1, message = "Pages must be at least 1"))]
    pub pages: i32,

    pub category: ProductCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_defaults_to_first_page_of_twelve() {
        let req: FindAllProducts = serde_json::from_str("{}").unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 12);
        assert!(req.search.is_empty());
        assert!(req.category.is_none());
    }

    #[test]
    fn negative_price_fails_validation() {
        let req = CreateProductRequest {
            name: "Notebook".into(),
            description: "Ruled, 80 pages".into(),
            price: -1,
            pages: 80,
            category: ProductCategory::SchoolSupplies,
        };
        assert!(req.validate().is_err());
    }
}
