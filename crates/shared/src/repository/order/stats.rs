use crate::{
    abstract_trait::{MonthBucket, OrderStatsRepositoryTrait, RevenueTotals},
    config::ConnectionPool,
    errors::RepositoryError,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::error;

pub struct OrderStatsRepository {
    db: ConnectionPool,
}

impl OrderStatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderStatsRepositoryTrait for OrderStatsRepository {
    async fn revenue_totals(&self) -> Result<RevenueTotals, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let (total, daily, weekly, monthly) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                COALESCE(SUM(total), 0)::BIGINT,
                COALESCE(SUM(total) FILTER (WHERE created_at >= date_trunc('day', LOCALTIMESTAMP)), 0)::BIGINT,
                COALESCE(SUM(total) FILTER (WHERE created_at >= date_trunc('week', LOCALTIMESTAMP)), 0)::BIGINT,
                COALESCE(SUM(total) FILTER (WHERE created_at >= date_trunc('month', LOCALTIMESTAMP)), 0)::BIGINT
            FROM orders
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate revenue: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(RevenueTotals {
            total,
            daily,
            weekly,
            monthly,
        })
    }

    async fn count_by_status(&self) -> Result<Vec<(String, i64)>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let counts = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM orders GROUP BY status",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count orders by status: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(counts)
    }

    async fn monthly_totals(&self, from: NaiveDate) -> Result<Vec<MonthBucket>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT date_trunc('month', created_at)::date, COALESCE(SUM(total), 0)::BIGINT
            FROM orders
            WHERE created_at >= $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(from)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate monthly sales: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(month, total)| MonthBucket { month, total })
            .collect())
    }

    async fn top_products(&self, limit: i64) -> Result<Vec<(String, i64)>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT p.name, SUM(oi.quantity)::BIGINT AS sold
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            GROUP BY p.product_id, p.name
            ORDER BY sold DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to rank products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
