use super::numbering;
use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderRequest,
    errors::RepositoryError,
    model::{Order, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

const ORDER_COLUMNS: &str = "order_id, order_number, user_id, total, status, created_at";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<Order, RepositoryError> {
        // Numbered before the transaction opens: a counter failure must not
        // poison the transaction the order row goes into.
        let order_number = numbering::next_order_number(&self.db).await;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (order_number, user_id, total, status, created_at)
            VALUES ($1, $2, $3, $4, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order_number)
        .bind(user_id)
        .bind(req.total)
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        for item in &req.items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to add item (product {}) to order {}: {:?}",
                    item.product_id, order.order_id, err
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order #{} (ID {}) for user {}",
            order.order_number, order.order_id, user_id
        );
        Ok(order)
    }

    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET status = $2
            WHERE order_id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order #{} is now {}", order.order_number, order.status);
        Ok(order)
    }
}
