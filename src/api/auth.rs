use poem::http::HeaderMap;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::{access_guard, AuthService, TokenService, VerifyOutcome};
use crate::types::dto::auth::{LoginRequest, TokenResponse, WhoAmIResponse};

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given AuthService and TokenService
    pub fn new(auth_service: Arc<AuthService>, token_service: Arc<TokenService>) -> Self {
        Self {
            auth_service,
            token_service,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password to receive a session token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, ApiError> {
        let identity = match self.auth_service.verify(&body.email, &body.password).await? {
            VerifyOutcome::Success(identity) => identity,
            // One generic rejection for every cause
            VerifyOutcome::InvalidCredentials => return Err(ApiError::invalid_credentials()),
        };

        let access_token = self.token_service.issue(&identity)?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.expires_in_seconds(),
        }))
    }

    /// Verify the session token and return the identity it carries
    #[oai(path = "/whoami", method = "get", tag = "AuthTags::Authentication")]
    async fn whoami(&self, headers: &HeaderMap) -> Result<Json<WhoAmIResponse>, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;

        Ok(Json(WhoAmIResponse {
            user_id: claims.sub,
            role: claims.role.as_str().to_string(),
            expires_at: claims.exp,
        }))
    }
}
