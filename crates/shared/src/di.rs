use crate::{
    abstract_trait::{
        DynAuthService, DynFileStorage, DynHashing, DynJwtService, DynNotifier,
        DynOrderCommandService, DynOrderQueryService, DynOrderStatsService,
        DynProductCommandService, DynProductQueryService, DynUserQueryService,
    },
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository, UserRepository},
    service::{
        AuthService, OrderCommandService, OrderQueryService, OrderStatsService,
        ProductCommandService, ProductQueryService, UserQueryService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserQueryService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub order_stats_service: DynOrderStatsService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserQueryService>")
            .field("product_query_service", &"<ProductQueryService>")
            .field("product_command_service", &"<ProductCommandService>")
            .field("order_query_service", &"<OrderQueryService>")
            .field("order_command_service", &"<OrderCommandService>")
            .field("order_stats_service", &"<OrderStatsService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub storage: DynFileStorage,
    pub notifier: Option<DynNotifier>,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            storage,
            notifier,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool);

        let auth_service = Arc::new(AuthService::new(
            user_repository.query.clone(),
            user_repository.command.clone(),
            hash,
            jwt_config,
        )) as DynAuthService;

        let user_service =
            Arc::new(UserQueryService::new(user_repository.query.clone())) as DynUserQueryService;

        let product_query_service =
            Arc::new(ProductQueryService::new(product_repository.query.clone()))
                as DynProductQueryService;

        let product_command_service = Arc::new(ProductCommandService::new(
            product_repository.command.clone(),
            storage,
        )) as DynProductCommandService;

        let order_query_service = Arc::new(OrderQueryService::new(
            order_repository.query.clone(),
            user_repository.query.clone(),
        )) as DynOrderQueryService;

        let order_command_service = Arc::new(OrderCommandService::new(
            order_repository.command.clone(),
            order_repository.query.clone(),
            user_repository.query.clone(),
            notifier,
        )) as DynOrderCommandService;

        let order_stats_service = Arc::new(OrderStatsService::new(
            order_repository.stats.clone(),
            order_repository.query.clone(),
            user_repository.query.clone(),
        )) as DynOrderStatsService;

        Self {
            auth_service,
            user_service,
            product_query_service,
            product_command_service,
            order_query_service,
            order_command_service,
            order_stats_service,
        }
    }
}
