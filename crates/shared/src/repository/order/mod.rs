mod command;
mod numbering;
mod query;
mod stats;

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;
use self::stats::OrderStatsRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository, DynOrderStatsRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub stats: DynOrderStatsRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let command =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;
        let stats = Arc::new(OrderStatsRepository::new(pool)) as DynOrderStatsRepository;

        Self {
            query,
            command,
            stats,
        }
    }
}
