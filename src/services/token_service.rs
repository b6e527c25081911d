use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use chrono::Utc;
use std::fmt;

use crate::errors::InternalError;
use crate::types::internal::{Claims, Identity};

/// Session decode failure
///
/// Either way the caller must treat the request as unauthenticated; the
/// split exists so the failure can be traced distinctly.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Signature does not verify, or the token is malformed
    Invalid,
    /// Token is past its validity window
    Expired,
}

/// Manages session token issuance and validation
///
/// Stateless strategy: identity and role travel as signed claims, no
/// server-side session store exists.
pub struct TokenService {
    jwt_secret: String,
    session_ttl_minutes: i64,
}

impl TokenService {
    /// Create a new TokenService with the given secret and validity window
    pub fn new(jwt_secret: String, session_ttl_minutes: i64) -> Self {
        Self {
            jwt_secret,
            session_ttl_minutes,
        }
    }

    /// Issue a signed session token for a verified identity
    ///
    /// Only `id` and `role` are embedded; everything else about the user
    /// must be re-fetched by whoever needs it.
    pub fn issue(&self, identity: &Identity) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: identity.id.clone(),
            role: identity.role,
            iat: now,
            exp: now + self.session_ttl_minutes * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::Token(e.to_string()))
    }

    /// Validate a session token and return its claims
    pub fn decode(&self, token: &str) -> Result<Claims, SessionError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
            _ => SessionError::Invalid,
        })?;

        Ok(token_data.claims)
    }

    /// Seconds a freshly issued token remains valid
    pub fn expires_in_seconds(&self) -> i64 {
        self.session_ttl_minutes * 60
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl_minutes", &self.session_ttl_minutes)
            .finish()
    }
}
