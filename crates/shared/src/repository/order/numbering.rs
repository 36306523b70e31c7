//! Display-number assignment for new orders.
//!
//! The human-facing order number is independent of the primary key: the
//! first order ever is 1000 and every later one is strictly larger. A
//! single-row counter is bumped with one atomic upsert, so two orders
//! created concurrently are serialized on the row lock and can never read
//! the same value. The UNIQUE constraint on `orders.order_number` stays in
//! place as a backstop.

use crate::config::ConnectionPool;
use chrono::Utc;
use tracing::warn;

pub const ORDER_NUMBER_BASE: i32 = 1000;

const BUMP_COUNTER: &str = r#"
INSERT INTO order_counters (id, current_number)
VALUES (TRUE, $1)
ON CONFLICT (id)
DO UPDATE SET current_number = order_counters.current_number + 1
RETURNING current_number
"#;

/// Returns the next display number.
///
/// The bump runs on its own connection, not inside the order-creation
/// transaction: a server-side error there would put that transaction into
/// the aborted state and the order insert would fail regardless of the
/// number we computed. If the counter cannot be bumped the order is still
/// created, with the last six digits of the current unix-millis timestamp
/// as its number, trading strict sequentiality for availability. A bump
/// whose order insert later fails only leaves a gap in the sequence.
pub(super) async fn next_order_number(db: &ConnectionPool) -> i32 {
    match bump_counter(db).await {
        Ok(number) => number,
        Err(err) => {
            let fallback = fallback_order_number(Utc::now().timestamp_millis());
            warn!(
                "⚠️ Order counter unavailable ({err:?}); falling back to timestamp-derived \
                 number {fallback}"
            );
            fallback
        }
    }
}

async fn bump_counter(db: &ConnectionPool) -> Result<i32, sqlx::Error> {
    let mut conn = db.acquire().await?;

    sqlx::query_scalar::<_, i32>(BUMP_COUNTER)
        .bind(ORDER_NUMBER_BASE)
        .fetch_one(&mut *conn)
        .await
}

fn fallback_order_number(unix_millis: i64) -> i32 {
    (unix_millis % 1_000_000) as i32
}
