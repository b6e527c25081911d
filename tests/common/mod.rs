// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use deudas_backend::services::{AuthService, TokenService};
use deudas_backend::stores::{DeudaStore, UserStore};
use deudas_backend::types::db::user;
use deudas_backend::types::internal::Role;

pub const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Fully wired application components over an in-memory database
pub struct TestApp {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub deuda_store: Arc<DeudaStore>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
}

/// Creates a migrated in-memory database with all stores and services
pub async fn setup_test_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let user_store = Arc::new(UserStore::new(db.clone()));
    let deuda_store = Arc::new(DeudaStore::new(db.clone()));
    let auth_service = Arc::new(AuthService::new(user_store.clone()));
    let token_service = Arc::new(TokenService::new(TEST_SECRET.to_string(), 480));

    TestApp {
        db,
        user_store,
        deuda_store,
        auth_service,
        token_service,
    }
}

/// Creates a user account through the store, panicking on failure
pub async fn create_user(app: &TestApp, name: &str, email: &str, password: &str, role: Role) -> user::Model {
    app.user_store
        .create(
            name.to_string(),
            email.to_string(),
            password.to_string(),
            role,
        )
        .await
        .expect("Failed to create test user")
}
