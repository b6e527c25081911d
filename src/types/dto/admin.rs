use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Request model for creating a user account
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name of the merchant or admin
    pub name: String,

    /// Login email, unique across accounts
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,

    /// Role ("USER" or "ADMIN"); defaults to "USER" when omitted
    pub role: Option<String>,
}

/// User account as returned to clients
///
/// Deliberately has no password field; the hash never leaves the server.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID (UUID)
    pub id: String,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Role ("USER" or "ADMIN")
    pub role: String,

    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            created_at: u.created_at,
        }
    }
}

/// API response for the create-user endpoint
#[derive(ApiResponse)]
pub enum CreateUserApiResponse {
    /// User created
    #[oai(status = 201)]
    Created(Json<UserResponse>),
}
