use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub pages: i32,
    pub image: Option<String>,
    pub category: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Closed set of catalog categories. Unknown values are rejected when the
/// request body or query string is deserialized, before anything touches
/// the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    SchoolSupplies,
    English,
    Medicine,
    Other,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::SchoolSupplies => "school_supplies",
            ProductCategory::English => "english",
            ProductCategory::Medicine => "medicine",
            ProductCategory::Other => "other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school_supplies" => Ok(ProductCategory::SchoolSupplies),
            "english" => Ok(ProductCategory::English),
            "medicine" => Ok(ProductCategory::Medicine),
            "other" => Ok(ProductCategory::Other),
            other => Err(format!("unknown product category: {other}")),
        }
    }
}
