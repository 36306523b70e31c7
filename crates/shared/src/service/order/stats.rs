use super::assemble_orders;
use crate::{
    abstract_trait::{
        DynOrderQueryRepository, DynOrderStatsRepository, DynUserQueryRepository,
        OrderStatsServiceTrait,
    },
    domain::responses::{ApiResponse, MonthlySales, OrderStatsResponse, StatusCount, TopProduct},
    errors::ServiceError,
    model::OrderStatus,
    utils::last_twelve_months,
};
use async_trait::async_trait;
use chrono::Local;
use std::collections::HashMap;

const RECENT_ORDERS: i64 = 5;
const TOP_PRODUCTS: i64 = 5;

#[derive(Clone)]
pub struct OrderStatsService {
    stats: DynOrderStatsRepository,
    order_query: DynOrderQueryRepository,
    user_query: DynUserQueryRepository,
}

impl OrderStatsService {
    pub fn new(
        stats: DynOrderStatsRepository,
        order_query: DynOrderQueryRepository,
        user_query: DynUserQueryRepository,
    ) -> Self {
        Self {
            stats,
            order_query,
            user_query,
        }
    }
}

#[async_trait]
impl OrderStatsServiceTrait for OrderStatsService {
    async fn stats(&self) -> Result<ApiResponse<OrderStatsResponse>, ServiceError> {
        let revenue = self.stats.revenue_totals().await?;
        let counts = self.stats.count_by_status().await?;
        let recent_orders = self.order_query.find_recent(RECENT_ORDERS).await?;

        let counts_by_status: HashMap<String, i64> = counts.into_iter().collect();
        let total_orders: i64 = counts_by_status.values().sum();

        // Every known status appears, zero-filled, so the dashboard never
        // has to guess at missing keys.
        let orders_by_status = OrderStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                count: counts_by_status.get(status.as_str()).copied().unwrap_or(0),
            })
            .collect();

        let recent = assemble_orders(&self.order_query, &self.user_query, recent_orders).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Stats retrieved".into(),
            data: OrderStatsResponse {
                total_revenue: revenue.total,
                daily_revenue: revenue.daily,
                weekly_revenue: revenue.weekly,
                monthly_revenue: revenue.monthly,
                total_orders,
                orders_by_status,
                recent,
            },
        })
    }

    async fn sales_by_month(&self) -> Result<ApiResponse<Vec<MonthlySales>>, ServiceError> {
        let months = last_twelve_months(Local::now().date_naive());
        let from = months
            .first()
            .map(|(month, _)| *month)
            .unwrap_or_else(|| Local::now().date_naive());

        let buckets = self.stats.monthly_totals(from).await?;
        let totals: HashMap<_, _> = buckets.into_iter().map(|b| (b.month, b.total)).collect();

        let data = months
            .into_iter()
            .map(|(month, label)| MonthlySales {
                label,
                total: totals.get(&month).copied().unwrap_or(0),
            })
            .collect();

        Ok(ApiResponse {
            status: "success".into(),
            message: "Monthly sales retrieved".into(),
            data,
        })
    }

    async fn top_products(&self) -> Result<ApiResponse<Vec<TopProduct>>, ServiceError> {
        let rows = self.stats.top_products(TOP_PRODUCTS).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Top products retrieved".into(),
            data: rows
                .into_iter()
                .map(|(name, count)| TopProduct { name, count })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            MonthBucket, OrderQueryRepositoryTrait, OrderStatsRepositoryTrait, RevenueTotals,
            UserQueryRepositoryTrait,
        },
        errors::RepositoryError,
        model::{Order, OrderItemDetail, User},
    };
    use chrono::{Datelike, NaiveDate};
    use std::sync::Arc;

    struct MockStats {
        counts: Vec<(String, i64)>,
        buckets: Vec<MonthBucket>,
    }

    #[async_trait]
    impl OrderStatsRepositoryTrait for MockStats {
        async fn revenue_totals(&self) -> Result<RevenueTotals, RepositoryError> {
            Ok(RevenueTotals {
                total: 100_000,
                daily: 1_000,
                weekly: 10_000,
                monthly: 50_000,
            })
        }

        async fn count_by_status(&self) -> Result<Vec<(String, i64)>, RepositoryError> {
            Ok(self.counts.clone())
        }

        async fn monthly_totals(
            &self,
            _from: NaiveDate,
        ) -> Result<Vec<MonthBucket>, RepositoryError> {
            Ok(self.buckets.clone())
        }

        async fn top_products(&self, limit: i64) -> Result<Vec<(String, i64)>, RepositoryError> {
            Ok(vec![("Notebook".into(), 12), ("Flyer".into(), 7)]
                .into_iter()
                .take(limit as usize)
                .collect())
        }
    }

    struct EmptyOrderQuery;

    #[async_trait]
    impl OrderQueryRepositoryTrait for EmptyOrderQuery {
        async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_user(&self, _user_id: i32) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_user_ids(&self, _user_ids: &[i32]) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_number_suffix(
            &self,
            _suffix: &str,
        ) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_recent(&self, _limit: i64) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_items(
            &self,
            _order_ids: &[i32],
        ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    struct NoUserQuery;

    #[async_trait]
    impl UserQueryRepositoryTrait for NoUserQuery {
        async fn find_all(&self, _search: &str) -> Result<Vec<User>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_ids(&self, _ids: &[i32]) -> Result<Vec<User>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_matching_ids(&self, _term: &str) -> Result<Vec<i32>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    fn service(counts: Vec<(String, i64)>, buckets: Vec<MonthBucket>) -> OrderStatsService {
        OrderStatsService::new(
            Arc::new(MockStats { counts, buckets }),
            Arc::new(EmptyOrderQuery),
            Arc::new(NoUserQuery),
        )
    }

    #[tokio::test]
    async fn status_counts_are_zero_filled() {
        let svc = service(vec![("pending".into(), 3), ("delivered".into(), 1)], vec![]);

        let res = svc.stats().await.unwrap();
        let data = res.data;

        assert_eq!(data.total_orders, 4);
        assert_eq!(data.orders_by_status.len(), 4);

        let by_status: std::collections::HashMap<_, _> = data
            .orders_by_status
            .iter()
            .map(|c| (c.status.as_str(), c.count))
            .collect();
        assert_eq!(by_status["pending"], 3);
        assert_eq!(by_status["in_process"], 0);
        assert_eq!(by_status["ready_for_pickup"], 0);
        assert_eq!(by_status["delivered"], 1);
    }

    #[tokio::test]
    async fn sales_series_covers_twelve_months_with_gaps_zeroed() {
        let today = Local::now().date_naive();
        let current_month =
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        let svc = service(
            vec![],
            vec![MonthBucket {
                month: current_month,
                total: 42_000,
            }],
        );

        let res = svc.sales_by_month().await.unwrap();
        assert_eq!(res.data.len(), 12);
        assert_eq!(res.data[11].total, 42_000);
        assert!(res.data[..11].iter().all(|m| m.total == 0));
    }

    #[tokio::test]
    async fn top_products_maps_names_and_counts() {
        let svc = service(vec![], vec![]);

        let res = svc.top_products().await.unwrap();
        assert_eq!(res.data.len(), 2);
        assert_eq!(res.data[0].name, "Notebook");
        assert_eq!(res.data[0].count, 12);
    }
}
