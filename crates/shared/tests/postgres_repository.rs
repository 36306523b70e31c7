//! Repository tests that need a real Postgres instance.
//!
//! Set `DATABASE_URL` to a throwaway database and run with
//! `cargo test -p shared -- --ignored`. Each test seeds its own rows with
//! unique markers; the tests that touch the order counter serialize on a
//! session advisory lock so they stay safe to run in parallel.

use shared::{
    abstract_trait::{
        OrderCommandRepositoryTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
        UserCommandRepositoryTrait,
    },
    config::{ConnectionManager, ConnectionPool},
    domain::requests::{
        CreateOrderItem, CreateOrderRequest, CreateProductRequest, FindAllProducts,
        RegisterRequest,
    },
    model::ProductCategory,
    repository::{OrderRepository, ProductRepository, UserRepository},
};
use uuid::Uuid;

const COUNTER_LOCK_KEY: i64 = 744_100;

async fn test_pool() -> ConnectionPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = ConnectionManager::new_pool(&url).await.expect("connect");
    ConnectionManager::run_migrations(&pool)
        .await
        .expect("migrate");
    pool
}

/// Session-level advisory lock held on a dedicated connection. Pooled
/// connections are reused, so the lock must be released explicitly.
struct CounterLock(sqlx::pool::PoolConnection<sqlx::Postgres>);

impl CounterLock {
    async fn acquire(pool: &ConnectionPool) -> Self {
        let mut conn = pool.acquire().await.expect("lock connection");
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(COUNTER_LOCK_KEY)
            .execute(&mut *conn)
            .await
            .expect("advisory lock");
        Self(conn)
    }

    async fn release(mut self) {
        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(COUNTER_LOCK_KEY)
            .execute(&mut *self.0)
            .await
            .expect("advisory unlock");
    }
}

async fn seed_user(pool: &ConnectionPool) -> i32 {
    let req = RegisterRequest {
        name: "Integration Tester".into(),
        email: format!("{}@example.com", Uuid::new_v4()),
        password: "hunter42".into(),
        phone: None,
        institution: None,
    };
    UserRepository::new(pool.clone())
        .command
        .create_user(&req, "not-a-real-hash")
        .await
        .expect("seed user")
        .user_id
}

async fn seed_product(
    products: &ProductRepository,
    name: &str,
    description: &str,
    category: ProductCategory,
) -> i32 {
    let req = CreateProductRequest {
        name: name.into(),
        description: description.into(),
        price: 25_000,
        pages: 80,
        category,
    };
    products
        .command
        .create_product(&req, None)
        .await
        .expect("seed product")
        .product_id
}

fn order_request(product_id: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        items: vec![CreateOrderItem {
            product_id,
            quantity: 1,
        }],
        total: 25_000,
    }
}

#[tokio::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn concurrent_creations_get_distinct_order_numbers() {
    let pool = test_pool().await;
    let lock = CounterLock::acquire(&pool).await;

    let user_id = seed_user(&pool).await;
    let products = ProductRepository::new(pool.clone());
    let product_id = seed_product(&products, "Ruled notebook", "80 pages", ProductCategory::Other)
        .await;

    let orders = OrderRepository::new(pool.clone());
    let req = order_request(product_id);

    let (first, second) = tokio::join!(
        orders.command.create_order(user_id, &req),
        orders.command.create_order(user_id, &req)
    );
    lock.release().await;

    let first = first.expect("first order");
    let second = second.expect("second order");

    assert_ne!(first.order_number, second.order_number);
    assert!(first.order_number >= 1000);
    assert!(second.order_number >= 1000);
}

#[tokio::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn order_is_still_created_when_counter_is_unavailable() {
    let pool = test_pool().await;
    let lock = CounterLock::acquire(&pool).await;

    let user_id = seed_user(&pool).await;
    let products = ProductRepository::new(pool.clone());
    let product_id =
        seed_product(&products, "Spiral notebook", "120 pages", ProductCategory::Other).await;
    let orders = OrderRepository::new(pool.clone());

    sqlx::query("ALTER TABLE order_counters RENAME TO order_counters_offline")
        .execute(&pool)
        .await
        .expect("hide counter table");

    let created = orders
        .command
        .create_order(user_id, &order_request(product_id))
        .await;

    sqlx::query("ALTER TABLE order_counters_offline RENAME TO order_counters")
        .execute(&pool)
        .await
        .expect("restore counter table");
    lock.release().await;

    let order = created.expect("order created without the counter");
    assert!(order.order_number >= 0);

    let stored = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE order_id = $1")
        .bind(order.order_id)
        .fetch_one(&pool)
        .await
        .expect("count created order");
    assert_eq!(stored, 1);
}

#[tokio::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn category_and_search_filters_compose_with_and() {
    let pool = test_pool().await;
    let products = ProductRepository::new(pool.clone());

    let marker = format!("notebook-{}", Uuid::new_v4());

    let hit = seed_product(
        &products,
        &format!("{marker} ruled"),
        "Ruled pages",
        ProductCategory::English,
    )
    .await;
    // category matches, search does not
    seed_product(&products, "Dictionary", "Pocket size", ProductCategory::English).await;
    // search matches, category does not
    seed_product(
        &products,
        &format!("{marker} spiral"),
        "Spiral bound",
        ProductCategory::SchoolSupplies,
    )
    .await;

    let req = FindAllProducts {
        search: marker,
        category: Some(ProductCategory::English),
        ..Default::default()
    };
    let (rows, total) = products.query.find_all(&req).await.expect("filtered listing");

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_id, hit);
    assert_eq!(rows[0].category, "english");
}
