use crate::{
    abstract_trait::{DynFileStorage, DynHashing, DynJwtService, DynNotifier},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    notifier::EmailNotifier,
    storage::LocalStorage,
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let hash = Arc::new(Hashing::new()) as DynHashing;
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let storage = Arc::new(LocalStorage::new(&config.upload_dir)) as DynFileStorage;

        let notifier = match &config.email {
            Some(email) => {
                let notifier =
                    EmailNotifier::new(email).context("Failed to initialize SMTP notifier")?;
                Some(Arc::new(notifier) as DynNotifier)
            }
            None => {
                info!("📭 SMTP not configured; order notifications are disabled");
                None
            }
        };

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash,
            jwt_config: jwt_config.clone(),
            storage,
            notifier,
        });

        Ok(Self {
            di_container,
            jwt_config,
        })
    }
}
