use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct FindAllUsers {
    #[serde(default)]
    pub search: String,
}
