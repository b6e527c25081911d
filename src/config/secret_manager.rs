use std::env;
use std::fmt;

/// Default session validity window in minutes (8 hours)
const DEFAULT_SESSION_TTL_MINUTES: i64 = 480;

/// Minimum accepted length for the JWT signing secret
const JWT_SECRET_MIN_LENGTH: usize = 32;

/// Custom error type for secret-related failures
#[derive(Debug)]
pub enum SecretError {
    Missing {
        secret_name: String,
    },
    InvalidLength {
        secret_name: String,
        expected: usize,
        actual: usize,
    },
    InvalidValue {
        secret_name: String,
        message: String,
    },
}

impl SecretError {
    pub fn missing(secret_name: &str) -> Self {
        Self::Missing {
            secret_name: secret_name.to_string(),
        }
    }

    pub fn invalid_length(secret_name: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            secret_name: secret_name.to_string(),
            expected,
            actual,
        }
    }

    pub fn invalid_value(secret_name: &str, message: &str) -> Self {
        Self::InvalidValue {
            secret_name: secret_name.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { secret_name } => {
                write!(f, "Required secret '{}' is missing", secret_name)
            }
            Self::InvalidLength {
                secret_name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Secret '{}' must be at least {} characters, got {}",
                    secret_name, expected, actual
                )
            }
            Self::InvalidValue {
                secret_name,
                message,
            } => {
                write!(f, "Secret '{}' is invalid: {}", secret_name, message)
            }
        }
    }
}

impl std::error::Error for SecretError {}

/// Centralized manager for the signing secret and session policy
///
/// The secret is process-wide; rotating it means restarting with a new
/// `JWT_SECRET`, which invalidates every outstanding session.
pub struct SecretManager {
    jwt_secret: String,
    session_ttl_minutes: i64,
}

impl SecretManager {
    /// Initialize the SecretManager by loading and validating all secrets
    ///
    /// # Errors
    /// Returns `SecretError` if `JWT_SECRET` is missing or too short, or if
    /// `SESSION_TTL_MINUTES` is present but not a positive integer
    pub fn init() -> Result<Self, SecretError> {
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| SecretError::missing("JWT_SECRET"))?;

        if jwt_secret.len() < JWT_SECRET_MIN_LENGTH {
            return Err(SecretError::invalid_length(
                "JWT_SECRET",
                JWT_SECRET_MIN_LENGTH,
                jwt_secret.len(),
            ));
        }

        let session_ttl_minutes = match env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => {
                let parsed: i64 = raw.parse().map_err(|_| {
                    SecretError::invalid_value("SESSION_TTL_MINUTES", "not an integer")
                })?;
                if parsed <= 0 {
                    return Err(SecretError::invalid_value(
                        "SESSION_TTL_MINUTES",
                        "must be positive",
                    ));
                }
                parsed
            }
            Err(_) => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Self {
            jwt_secret,
            session_ttl_minutes,
        })
    }

    /// Get the JWT signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get the configured session validity window in minutes
    pub fn session_ttl_minutes(&self) -> i64 {
        self.session_ttl_minutes
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl_minutes", &self.session_ttl_minutes)
            .finish()
    }
}
