use std::sync::Arc;

use crate::errors::InternalError;
use crate::stores::UserStore;
use crate::types::internal::{Identity, Role};

/// Outcome of credential verification
///
/// `InvalidCredentials` covers every rejection cause: unknown email,
/// account without a local credential, and password mismatch. Callers must
/// surface them identically so emails cannot be enumerated.
pub enum VerifyOutcome {
    Success(Identity),
    InvalidCredentials,
}

/// AuthService verifies email/password pairs against stored credentials
pub struct AuthService {
    user_store: Arc<UserStore>,
}

impl AuthService {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }

    /// Verify a credential pair and return the identity on success
    ///
    /// Read-only: nothing is written on either path. The cause of a
    /// rejection is traced internally but never returned.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<VerifyOutcome, InternalError> {
        if email.is_empty() || password.is_empty() {
            tracing::debug!("login rejected: missing email or password");
            return Ok(VerifyOutcome::InvalidCredentials);
        }

        let user = match self.user_store.find_by_email(email).await? {
            Some(u) => u,
            None => {
                tracing::debug!("login rejected: unknown email");
                return Ok(VerifyOutcome::InvalidCredentials);
            }
        };

        let Some(hash) = user.password_hash.as_deref() else {
            tracing::debug!(user_id = %user.id, "login rejected: account has no local credential");
            return Ok(VerifyOutcome::InvalidCredentials);
        };

        match bcrypt::verify(password, hash) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
                return Ok(VerifyOutcome::InvalidCredentials);
            }
            Err(e) => {
                // An unparseable stored hash is indistinguishable from a
                // mismatch as far as the caller is concerned
                tracing::warn!(user_id = %user.id, error = %e, "stored password hash rejected by bcrypt");
                return Ok(VerifyOutcome::InvalidCredentials);
            }
        }

        let role = Role::parse(&user.role)
            .ok_or_else(|| InternalError::InvalidStoredRole(user.role.clone()))?;

        Ok(VerifyOutcome::Success(Identity {
            id: user.id,
            email: user.email,
            name: user.name,
            role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, Set};

    use crate::types::db::user;

    async fn setup() -> AuthService {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(UserStore::new(db.clone()));
        store
            .create(
                "Ana".to_string(),
                "ana@x.com".to_string(),
                "secret1".to_string(),
                Role::User,
            )
            .await
            .unwrap();

        // Account provisioned without a local credential
        user::ActiveModel {
            id: Set("ext-1".to_string()),
            name: Set("Externa".to_string()),
            email: Set("ext@x.com".to_string()),
            password_hash: Set(None),
            role: Set("USER".to_string()),
            created_at: Set(0),
        }
        .insert(&db)
        .await
        .unwrap();

        AuthService::new(store)
    }

    #[tokio::test]
    async fn test_verify_success_returns_identity_without_hash() {
        let auth = setup().await;

        match auth.verify("ana@x.com", "secret1").await.unwrap() {
            VerifyOutcome::Success(identity) => {
                assert_eq!(identity.email, "ana@x.com");
                assert_eq!(identity.name, "Ana");
                assert_eq!(identity.role, Role::User);
            }
            VerifyOutcome::InvalidCredentials => panic!("Expected success"),
        }
    }

    #[tokio::test]
    async fn test_all_rejection_causes_are_uniform() {
        let auth = setup().await;

        // Unknown email, wrong password, empty fields, credential-less
        // account: all the same outcome
        for (email, password) in [
            ("nadie@x.com", "secret1"),
            ("ana@x.com", "wrong"),
            ("", "secret1"),
            ("ana@x.com", ""),
            ("ext@x.com", "anything"),
        ] {
            let outcome = auth.verify(email, password).await.unwrap();
            assert!(
                matches!(outcome, VerifyOutcome::InvalidCredentials),
                "expected rejection for {:?}",
                (email, password)
            );
        }
    }
}
