mod auth;
mod hashing;
mod jwt;
mod notifier;
mod order;
mod product;
mod storage;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{AuthUser, DynJwtService, JwtServiceTrait};
pub use self::notifier::{DynNotifier, NotifierTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, DynOrderStatsRepository, DynOrderStatsService, MonthBucket,
    OrderCommandRepositoryTrait, OrderCommandServiceTrait, OrderQueryRepositoryTrait,
    OrderQueryServiceTrait, OrderStatsRepositoryTrait, OrderStatsServiceTrait, RevenueTotals,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::storage::{DynFileStorage, FileStorageTrait, UploadedFile};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserQueryService,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait, UserQueryServiceTrait,
};
