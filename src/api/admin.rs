use poem::http::HeaderMap;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::{access_guard, TokenService};
use crate::stores::UserStore;
use crate::types::dto::admin::{CreateUserApiResponse, CreateUserRequest, UserResponse};
use crate::types::internal::Role;

/// Admin API endpoints for user account management
pub struct AdminApi {
    user_store: Arc<UserStore>,
    token_service: Arc<TokenService>,
}

impl AdminApi {
    /// Create a new AdminApi with the given UserStore and TokenService
    pub fn new(user_store: Arc<UserStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_store,
            token_service,
        }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// User account management, ADMIN role required
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// List every user account, without password hashes
    #[oai(path = "/users", method = "get", tag = "AdminTags::Admin")]
    async fn list_users(&self, headers: &HeaderMap) -> Result<Json<Vec<UserResponse>>, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;
        access_guard::require_admin(&claims)?;

        let users = self.user_store.list().await?;

        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Create a user account
    ///
    /// Role defaults to USER when omitted; unknown role strings are
    /// rejected rather than silently defaulted.
    #[oai(path = "/users", method = "post", tag = "AdminTags::Admin")]
    async fn create_user(
        &self,
        headers: &HeaderMap,
        body: Json<CreateUserRequest>,
    ) -> Result<CreateUserApiResponse, ApiError> {
        let claims = access_guard::authenticate(headers, &self.token_service)?;
        access_guard::require_admin(&claims)?;

        if body.name.is_empty() || body.email.is_empty() || body.password.is_empty() {
            return Err(ApiError::missing_fields());
        }

        let role = match body.role.as_deref() {
            None => Role::User,
            Some(value) => {
                Role::parse(value).ok_or_else(|| ApiError::invalid_input("Rol inválido"))?
            }
        };

        let user = self
            .user_store
            .create(
                body.name.clone(),
                body.email.clone(),
                body.password.clone(),
                role,
            )
            .await?;

        Ok(CreateUserApiResponse::Created(Json(UserResponse::from(
            user,
        ))))
    }
}
