mod auth;
mod order;
mod product;
mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::order::{
    CreateOrderItem, CreateOrderRequest, FindAllOrders, UpdateOrderStatusRequest,
};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::user::FindAllUsers;
