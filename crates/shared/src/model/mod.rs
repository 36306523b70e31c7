mod order;
mod product;
mod user;

pub use self::order::{Order, OrderItem, OrderItemDetail, OrderStatus};
pub use self::product::{Product, ProductCategory};
pub use self::user::User;
