use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderItemDetail},
};
use async_trait::async_trait;
use tracing::error;

const ORDER_COLUMNS: &str = "order_id, order_number, user_id, total, status, created_at";

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_user_ids(&self, user_ids: &[i32]) -> Result<Vec<Order>, RepositoryError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = ANY($1) ORDER BY created_at DESC"
        ))
        .bind(user_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_number_suffix(&self, suffix: &str) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Sequential scan over the text form of the display id; not
        // index-assisted, acceptable at this shop's order volume.
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE order_number::TEXT LIKE $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(format!("%{suffix}"))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to search orders by suffix {suffix}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_id, oi.product_id, p.name, p.price, p.image, oi.quantity
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = ANY($1)
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
