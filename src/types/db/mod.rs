// Database entities - SeaORM models
pub mod deuda;
pub mod deudor;
pub mod user;
