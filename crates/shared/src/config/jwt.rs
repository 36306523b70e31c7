use crate::{
    abstract_trait::{AuthUser, JwtServiceTrait},
    errors::ServiceError,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i32, is_admin: bool) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            is_admin,
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<AuthUser, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        Ok(AuthUser {
            user_id: token_data.claims.user_id,
            is_admin: token_data.claims.is_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_preserves_identity() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42, true).unwrap();
        let user = jwt.verify_token(&token).unwrap();
        assert_eq!(user.user_id, 42);
        assert!(user.is_admin);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");
        let token = other.generate_token(42, false).unwrap();
        assert!(jwt.verify_token(&token).is_err());
    }
}
