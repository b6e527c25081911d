use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::SecretManager;
use crate::services::{AuthService, TokenService};
use crate::stores::{DeudaStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All stores and services are created once here and shared via `Arc`;
/// there is no global connection state, the handle is injected into every
/// component that needs it.
pub struct AppData {
    pub db: DatabaseConnection,
    pub secret_manager: Arc<SecretManager>,
    pub user_store: Arc<UserStore>,
    pub deuda_store: Arc<DeudaStore>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
}

impl AppData {
    /// Wire up all stores and services over one database connection
    ///
    /// The connection should be migrated before calling this.
    pub fn init(db: DatabaseConnection, secret_manager: SecretManager) -> Self {
        tracing::debug!("creating stores and services");

        let secret_manager = Arc::new(secret_manager);

        let user_store = Arc::new(UserStore::new(db.clone()));
        let deuda_store = Arc::new(DeudaStore::new(db.clone()));

        let auth_service = Arc::new(AuthService::new(user_store.clone()));
        let token_service = Arc::new(TokenService::new(
            secret_manager.jwt_secret().to_string(),
            secret_manager.session_ttl_minutes(),
        ));

        tracing::info!("AppData initialization complete");

        Self {
            db,
            secret_manager,
            user_store,
            deuda_store,
            auth_service,
            token_service,
        }
    }
}
