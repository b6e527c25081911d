// Services layer - authentication, session and authorization logic
pub mod access_guard;
pub mod auth_service;
pub mod token_service;

pub use auth_service::{AuthService, VerifyOutcome};
pub use token_service::{SessionError, TokenService};
