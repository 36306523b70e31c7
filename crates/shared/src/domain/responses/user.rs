use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as exposed to clients. The password hash never leaves the model
/// layer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub is_admin: bool,
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            institution: value.institution,
            is_admin: value.is_admin,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
