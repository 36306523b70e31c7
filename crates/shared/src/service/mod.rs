mod auth;
mod order;
mod product;
mod user;

pub use self::auth::AuthService;
pub use self::order::{OrderCommandService, OrderQueryService, OrderStatsService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::user::UserQueryService;
