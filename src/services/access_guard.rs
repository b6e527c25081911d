use poem::http::HeaderMap;

use crate::errors::ApiError;
use crate::services::token_service::TokenService;
use crate::stores::MutationOutcome;
use crate::types::internal::{Claims, Role};

/// Decode the session carried in the Authorization header
///
/// 401 for a missing or malformed header and for invalid or expired
/// tokens; the response does not say which.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Claims, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(ApiError::unauthorized)?
        .to_str()
        .map_err(|_| ApiError::unauthorized())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(ApiError::unauthorized)?;

    tokens.decode(token).map_err(|e| {
        tracing::debug!(reason = ?e, "session rejected");
        ApiError::unauthorized()
    })
}

/// Require the ADMIN role on an authenticated session
pub fn require_admin(claims: &Claims) -> Result<(), ApiError> {
    if claims.role == Role::Admin {
        Ok(())
    } else {
        Err(ApiError::forbidden())
    }
}

/// Map an ownership-gated mutation outcome to the API taxonomy
///
/// Existence takes precedence: an absent resource is a 404 for every
/// caller, admins included; only a present-but-foreign resource is a 403.
pub fn resolve_owned<T>(
    outcome: MutationOutcome<T>,
    missing_message: &str,
) -> Result<T, ApiError> {
    match outcome {
        MutationOutcome::Applied(value) => Ok(value),
        MutationOutcome::NotFound => Err(ApiError::not_found(missing_message)),
        MutationOutcome::NotOwner => Err(ApiError::forbidden()),
    }
}
