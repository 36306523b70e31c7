use super::assemble_orders;
use crate::{
    abstract_trait::{
        DynNotifier, DynOrderCommandRepository, DynOrderQueryRepository, DynUserQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderStatus},
    utils::{format_money, render_order_confirmation, render_order_ready},
};
use async_trait::async_trait;
use tracing::{info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    order_query: DynOrderQueryRepository,
    user_query: DynUserQueryRepository,
    notifier: Option<DynNotifier>,
}

impl OrderCommandService {
    pub fn new(
        command: DynOrderCommandRepository,
        order_query: DynOrderQueryRepository,
        user_query: DynUserQueryRepository,
        notifier: Option<DynNotifier>,
    ) -> Self {
        Self {
            command,
            order_query,
            user_query,
            notifier,
        }
    }

    /// Delivery is best effort: a failed or unconfigured notifier never
    /// affects the order operation that triggered it.
    async fn notify(&self, order: &Order, subject: &str, html: Result<String, askama::Error>) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        let html = match html {
            Ok(html) => html,
            Err(err) => {
                warn!(
                    "⚠️ Skipping notification for order #{}: template failed: {err}",
                    order.order_number
                );
                return;
            }
        };

        let recipient = match self.user_query.find_by_id(order.user_id).await {
            Ok(Some(user)) => user.email,
            Ok(None) => {
                warn!(
                    "⚠️ Skipping notification for order #{}: owner {} not found",
                    order.order_number, order.user_id
                );
                return;
            }
            Err(err) => {
                warn!(
                    "⚠️ Skipping notification for order #{}: owner lookup failed: {err}",
                    order.order_number
                );
                return;
            }
        };

        if let Err(err) = notifier.send(&recipient, subject, html).await {
            warn!(
                "⚠️ Failed to notify {} about order #{}: {err}",
                recipient, order.order_number
            );
        }
    }

    async fn owner_name(&self, order: &Order) -> String {
        match self.user_query.find_by_id(order.user_id).await {
            Ok(Some(user)) => user.name,
            _ => "customer".to_string(),
        }
    }

    async fn assemble(&self, order: Order) -> Result<OrderResponse, ServiceError> {
        let mut assembled =
            assemble_orders(&self.order_query, &self.user_query, vec![order]).await?;
        assembled
            .pop()
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.create_order(user_id, req).await?;

        let name = self.owner_name(&order).await;
        self.notify(
            &order,
            "We received your order",
            render_order_confirmation(&name, order.order_number, &format_money(order.total)),
        )
        .await;

        let data = self.assemble(order).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order created".into(),
            data,
        })
    }

    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.update_status(id, status).await?;

        if status == OrderStatus::ReadyForPickup {
            let name = self.owner_name(&order).await;
            self.notify(
                &order,
                "Your order is ready for pickup",
                render_order_ready(&name, order.order_number),
            )
            .await;
        }

        info!("🔄 Order {} moved to {}", id, status);

        let data = self.assemble(order).await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order status updated".into(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            NotifierTrait, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
            UserQueryRepositoryTrait,
        },
        domain::requests::CreateOrderItem,
        model::{OrderItemDetail, User},
    };
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicI32, Ordering},
    };

    struct MockOrderCommand {
        next_number: AtomicI32,
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for MockOrderCommand {
        async fn create_order(
            &self,
            user_id: i32,
            req: &CreateOrderRequest,
        ) -> Result<Order, RepositoryError> {
            let number = self.next_number.fetch_add(1, Ordering::SeqCst);
            Ok(Order {
                order_id: number - 999,
                order_number: number,
                user_id,
                total: req.total,
                status: "pending".into(),
                created_at: None,
            })
        }

        async fn update_status(
            &self,
            id: i32,
            status: OrderStatus,
        ) -> Result<Order, RepositoryError> {
            Ok(Order {
                order_id: id,
                order_number: 1042,
                user_id: 1,
                total: 5000,
                status: status.as_str().to_string(),
                created_at: None,
            })
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

    struct OneUserQuery;

    #[async_trait]
    impl UserQueryRepositoryTrait for OneUserQuery {
        async fn find_all(&self, _search: &str) -> Result<Vec<User>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(Some(User {
                user_id: id,
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password: "hash".into(),
                phone: None,
                institution: None,
                is_admin: false,
                created_at: None,
                updated_at: None,
            }))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, RepositoryError> {
            let mut users = Vec::new();
            for id in ids {
                if let Some(user) = self.find_by_id(*id).await? {
                    users.push(user);
                }
            }
            Ok(users)
        }

        async fn find_matching_ids(&self, _term: &str) -> Result<Vec<i32>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl NotifierTrait for RecordingNotifier {
        async fn send(
            &self,
            to: &str,
            subject: &str,
            html_body: String,
        ) -> Result<(), ServiceError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), html_body));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl NotifierTrait for FailingNotifier {
        async fn send(
            &self,
            _to: &str,
            _subject: &str,
            _html_body: String,
        ) -> Result<(), ServiceError> {
            Err(ServiceError::Custom("smtp down".into()))
        }
    }

    fn service(notifier: Option<DynNotifier>) -> OrderCommandService {
        OrderCommandService::new(
            Arc::new(MockOrderCommand {
                next_number: AtomicI32::new(1000),
            }),
            Arc::new(EmptyOrderQuery),
            Arc::new(OneUserQuery),
            notifier,
        )
    }

    fn create_request() -> CreateOrderRequest {
        CreateOrderRequest {
            items: vec![CreateOrderItem {
                product_id: 1,
                quantity: 2,
            }],
            total: 35000,
        }
    }

    #[tokio::test]
    async fn sequential_creates_get_increasing_numbers() {
        let svc = service(None);

        let first = svc.create(1, &create_request()).await.unwrap();
        let second = svc.create(1, &create_request()).await.unwrap();
        let third = svc.create(2, &create_request()).await.unwrap();

        assert_eq!(first.data.order_number, 1000);
        assert_eq!(second.data.order_number, 1001);
        assert_eq!(third.data.order_number, 1002);
    }

    #[tokio::test]
    async fn ready_for_pickup_sends_exactly_one_notification_with_display_id() {
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(Some(notifier.clone()));

        svc.update_status(43, OrderStatus::ReadyForPickup)
            .await
            .unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "ana@example.com");
        assert!(subject.contains("ready"));
        assert!(body.contains("1042"));
    }

    #[tokio::test]
    async fn other_transitions_do_not_notify() {
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(Some(notifier.clone()));

        svc.update_status(43, OrderStatus::InProcess).await.unwrap();
        svc.update_status(43, OrderStatus::Delivered).await.unwrap();

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_notifier_means_zero_notifications_and_success() {
        let svc = service(None);
        let res = svc
            .update_status(43, OrderStatus::ReadyForPickup)
            .await
            .unwrap();
        assert_eq!(res.data.status, "ready_for_pickup");
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_the_transition() {
        let svc = service(Some(Arc::new(FailingNotifier)));
        let res = svc
            .update_status(43, OrderStatus::ReadyForPickup)
            .await
            .unwrap();
        assert_eq!(res.data.status, "ready_for_pickup");
    }

    #[tokio::test]
    async fn create_sends_confirmation_with_total() {
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(Some(notifier.clone()));

        svc.create(1, &create_request()).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].2.contains("$ 350.00"));
        assert!(sent[0].2.contains("1000"));
    }
}
