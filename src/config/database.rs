use sea_orm::{Database, DatabaseConnection, DbErr};

/// Default connection string: file-backed SQLite created on demand
const DEFAULT_DATABASE_URL: &str = "sqlite://deudas.db?mode=rwc";

/// Connect to the database named by `DATABASE_URL`, or the SQLite default
pub async fn connect_from_env() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!(database_url = %database_url, "connecting to database");
    Database::connect(&database_url).await
}
