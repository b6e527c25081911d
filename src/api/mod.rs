// API layer - poem-openapi endpoint definitions
pub mod admin;
pub mod auth;
pub mod deudas;
pub mod health;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use deudas::DeudasApi;
pub use health::HealthApi;
