use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use deudas_backend::api::{AdminApi, AuthApi, DeudasApi, HealthApi};
use deudas_backend::config::{self, SecretManager};
use deudas_backend::errors::InternalError;
use deudas_backend::types::internal::Role;
use deudas_backend::AppData;
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let db = config::database::connect_from_env()
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("database migrations completed");

    let secret_manager = SecretManager::init().expect("Failed to load secrets");

    let app_data = AppData::init(db, secret_manager);

    seed_admin(&app_data).await;

    let auth_api = AuthApi::new(
        app_data.auth_service.clone(),
        app_data.token_service.clone(),
    );
    let admin_api = AdminApi::new(app_data.user_store.clone(), app_data.token_service.clone());
    let deudas_api = DeudasApi::new(app_data.deuda_store.clone(), app_data.token_service.clone());

    let api_service = OpenApiService::new(
        (HealthApi, auth_api, admin_api, deudas_api),
        "Deudas API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("listening on 0.0.0.0:3000");
    Server::new(TcpListener::bind("0.0.0.0:3000"))
        .run(app)
        .await
}

/// Seed the initial admin account from ADMIN_EMAIL / ADMIN_PASSWORD
///
/// Skipped when the variables are absent or the email already exists.
async fn seed_admin(app_data: &AppData) {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::debug!("no admin seed configured");
        return;
    };

    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrador".to_string());

    match app_data
        .user_store
        .create(name, email.clone(), password, Role::Admin)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "seeded admin account");
        }
        Err(InternalError::DuplicateEmail(_)) => {
            tracing::info!("admin account already exists, skipping seed");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to seed admin account");
        }
    }
}
