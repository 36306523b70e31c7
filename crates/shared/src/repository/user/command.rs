use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::RegisterRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, phone, institution, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING user_id, name, email, password, phone, institution, is_admin,
                      created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(password_hash)
        .bind(&req.phone)
        .bind(&req.institution)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {} ({})", user.user_id, user.email);
        Ok(user)
    }
}
