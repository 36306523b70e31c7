pub mod handler;
pub mod middleware;

pub use shared::state;
