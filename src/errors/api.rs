use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::InternalError;

/// Standardized error response body for all endpoints
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// API error taxonomy shared by every endpoint
///
/// Authentication failures are generic on purpose: the response never
/// reveals whether a given email exists.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[oai(status = 400)]
    InvalidInput(Json<ErrorBody>),

    /// No session, or an invalid/expired one
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Authenticated but disallowed by role or ownership
    #[oai(status = 403)]
    Forbidden(Json<ErrorBody>),

    /// Target resource does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Duplicate unique key
    #[oai(status = 409)]
    Conflict(Json<ErrorBody>),

    /// Unexpected failure in the storage layer
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl ApiError {
    /// Create an InvalidInput error with the given message
    pub fn invalid_input(message: &str) -> Self {
        ApiError::InvalidInput(Json(ErrorBody {
            error: "invalid_input".to_string(),
            message: message.to_string(),
            status_code: 400,
        }))
    }

    /// Create an InvalidInput error for missing required fields
    pub fn missing_fields() -> Self {
        Self::invalid_input("Faltan datos requeridos")
    }

    /// Create the uniform invalid-credentials error
    ///
    /// Same shape for unknown email, missing hash and wrong password.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized(Json(ErrorBody {
            error: "invalid_credentials".to_string(),
            message: "Credenciales inválidas".to_string(),
            status_code: 401,
        }))
    }

    /// Create an Unauthorized error for a missing or unusable session
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(Json(ErrorBody {
            error: "unauthorized".to_string(),
            message: "No autorizado".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error
    pub fn forbidden() -> Self {
        ApiError::Forbidden(Json(ErrorBody {
            error: "forbidden".to_string(),
            message: "Acceso denegado".to_string(),
            status_code: 403,
        }))
    }

    /// Create a NotFound error with the given message
    pub fn not_found(message: &str) -> Self {
        ApiError::NotFound(Json(ErrorBody {
            error: "not_found".to_string(),
            message: message.to_string(),
            status_code: 404,
        }))
    }

    /// Create a Conflict error for an email already in use
    pub fn email_in_use() -> Self {
        ApiError::Conflict(Json(ErrorBody {
            error: "email_in_use".to_string(),
            message: "El email ya está en uso".to_string(),
            status_code: 409,
        }))
    }

    /// Create an opaque InternalError
    pub fn internal_error() -> Self {
        ApiError::InternalError(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: "Error interno del servidor".to_string(),
            status_code: 500,
        }))
    }

    /// The response body, regardless of variant
    pub fn body(&self) -> &ErrorBody {
        match self {
            ApiError::InvalidInput(Json(b))
            | ApiError::Unauthorized(Json(b))
            | ApiError::Forbidden(Json(b))
            | ApiError::NotFound(Json(b))
            | ApiError::Conflict(Json(b))
            | ApiError::InternalError(Json(b)) => b,
        }
    }
}

impl From<InternalError> for ApiError {
    /// Storage failures are logged here and surfaced as opaque errors;
    /// duplicate-key failures keep their 409 identity.
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::DuplicateEmail(_) => ApiError::email_in_use(),
            other => {
                tracing::error!(error = %other, "internal error at API boundary");
                ApiError::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_401_and_generic() {
        let err = ApiError::invalid_credentials();
        let body = err.body();
        assert_eq!(body.status_code, 401);
        assert_eq!(body.error, "invalid_credentials");
        // Must not mention the email or distinguish the failure cause
        assert_eq!(body.message, "Credenciales inválidas");
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err: ApiError = InternalError::DuplicateEmail("a@x.com".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.body().status_code, 409);
    }

    #[test]
    fn test_database_error_surfaces_as_opaque_500() {
        let internal = InternalError::database(
            "find_by_id",
            sea_orm::DbErr::Custom("connection dropped".to_string()),
        );
        let err: ApiError = internal.into();
        assert!(matches!(err, ApiError::InternalError(_)));
        // No diagnostic detail crosses the boundary
        assert_eq!(err.body().message, "Error interno del servidor");
    }
}
