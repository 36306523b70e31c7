mod api;
mod order;
mod pagination;
mod product;
mod stats;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::order::{OrderItemResponse, OrderResponse, OrderUserResponse};
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
pub use self::stats::{MonthlySales, OrderStatsResponse, StatusCount, TopProduct};
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
