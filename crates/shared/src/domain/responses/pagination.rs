use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
    pub total_items: i64,
    pub total_pages: i32,
}

impl Pagination {
    pub fn new(page: i32, page_size: i32, total_items: i64) -> Self {
        let total_pages = if page_size > 0 {
            ((total_items as f64) / (page_size as f64)).ceil() as i32
        } else {
            0
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}
