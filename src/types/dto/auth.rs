use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email for authentication
    pub email: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the session token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,
}

/// Response model for whoami endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// User ID (UUID)
    pub user_id: String,

    /// Role carried by the session
    pub role: String,

    /// Token expiration time (Unix timestamp)
    pub expires_at: i64,
}
