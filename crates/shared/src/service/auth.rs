use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("📝 Registering account for {}", req.email);

        // Friendly message up front; the unique index on email remains the
        // real guarantee under concurrency.
        if self.query.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Email is already registered".into(),
            )));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;
        let user = self.command.create_user(req, &password_hash).await?;

        let token = self.jwt.generate_token(user.user_id, user.is_admin)?;

        info!("✅ Registered user {} ({})", user.user_id, user.email);
        Ok(ApiResponse {
            status: "success".into(),
            message: "Registration successful".into(),
            data: TokenResponse { token },
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Login attempt for {}", req.email);

        let user = self
            .query
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        let token = self.jwt.generate_token(user.user_id, user.is_admin)?;

        info!("✅ Login successful for user {}", user.user_id);
        Ok(ApiResponse {
            status: "success".into(),
            message: "Login successful".into(),
            data: TokenResponse { token },
        })
    }

    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Profile retrieved".into(),
            data: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{HashingTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        config::JwtConfig,
        model::User,
    };
    use std::sync::Arc;

    fn sample_user(id: i32, email: &str, password: &str) -> User {
        User {
            user_id: id,
            name: "Ana".into(),
            email: email.into(),
            password: format!("hashed:{password}"),
            phone: None,
            institution: None,
            is_admin: false,
            created_at: None,
            updated_at: None,
        }
    }

    struct MockUserQuery {
        existing: Option<User>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for MockUserQuery {
        async fn find_all(&self, _search: &str) -> Result<Vec<User>, RepositoryError> {
            Ok(self.existing.clone().into_iter().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.existing.clone().filter(|u| u.user_id == id))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self.existing.clone().filter(|u| u.email == email))
        }

        async fn find_by_ids(&self, _ids: &[i32]) -> Result<Vec<User>, RepositoryError> {
            Ok(self.existing.clone().into_iter().collect())
        }

        async fn find_matching_ids(&self, _term: &str) -> Result<Vec<i32>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    struct MockUserCommand;

    #[async_trait]
    impl UserCommandRepositoryTrait for MockUserCommand {
        async fn create_user(
            &self,
            req: &RegisterRequest,
            password_hash: &str,
        ) -> Result<User, RepositoryError> {
            let mut user = sample_user(7, &req.email, "x");
            user.password = password_hash.to_string();
            Ok(user)
        }
    }

    struct MockHashing;

    #[async_trait]
    impl HashingTrait for MockHashing {
        async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
            Ok(format!("hashed:{password}"))
        }

        async fn compare_password(
            &self,
            hashed_password: &str,
            password: &str,
        ) -> Result<(), ServiceError> {
            if hashed_password == format!("hashed:{password}") {
                Ok(())
            } else {
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    fn service(existing: Option<User>) -> AuthService {
        AuthService::new(
            Arc::new(MockUserQuery { existing }),
            Arc::new(MockUserCommand),
            Arc::new(MockHashing),
            Arc::new(JwtConfig::new("test-secret")),
        )
    }

    #[tokio::test]
    async fn register_returns_token_for_new_email() {
        let svc = service(None);
        let res = svc
            .register(&RegisterRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password: "secret1".into(),
                phone: None,
                institution: None,
            })
            .await
            .unwrap();
        assert!(!res.data.token.is_empty());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let svc = service(Some(sample_user(1, "ana@example.com", "pw")));
        let err = svc
            .register(&RegisterRequest {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password: "secret1".into(),
                phone: None,
                institution: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let svc = service(Some(sample_user(1, "ana@example.com", "right")));
        let err = svc
            .login(&LoginRequest {
                email: "ana@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_invalid_credentials() {
        let svc = service(None);
        let err = svc
            .login(&LoginRequest {
                email: "who@example.com".into(),
                password: "x".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
