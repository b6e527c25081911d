// Data transfer objects - API request/response models
pub mod admin;
pub mod auth;
pub mod deudas;
