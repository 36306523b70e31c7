use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User, utils::escape_like,
};
use async_trait::async_trait;
use tracing::{error, info};

const USER_COLUMNS: &str = "user_id, name, email, password, phone, institution, is_admin, \
                            created_at, updated_at";

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self, search: &str) -> Result<Vec<User>, RepositoryError> {
        info!("🔍 Fetching users with search: {:?}", search);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let pattern = if search.trim().is_empty() {
            None
        } else {
            Some(format!("%{}%", escape_like(search.trim())))
        };

        let users = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE ($1::TEXT IS NULL
                   OR name ILIKE $1
                   OR email ILIKE $1
                   OR phone ILIKE $1
                   OR institution ILIKE $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(pattern)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch users: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(users)
    }

    async fn find_matching_ids(&self, term: &str) -> Result<Vec<i32>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let pattern = format!("%{}%", escape_like(term.trim()));

        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT user_id
            FROM users
            WHERE name ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1
            "#,
        )
        .bind(pattern)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to match users for order search: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(ids)
    }
}
