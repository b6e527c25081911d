use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::user::{self, Entity as User};
use crate::types::internal::Role;

/// Work factor for newly created password hashes
const BCRYPT_COST: u32 = 10;

/// UserStore manages user accounts in the database
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by exact email match
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_by_email", e))
    }

    /// Look up a user by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<user::Model>, InternalError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_by_id", e))
    }

    /// List every user account
    ///
    /// Callers are responsible for stripping the password hash before
    /// serialization; the DTO layer has no field for it.
    pub async fn list(&self) -> Result<Vec<user::Model>, InternalError> {
        User::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    /// Create a new user account with a bcrypt-hashed password
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created user
    /// * `Err(InternalError::DuplicateEmail)` - The email is already in use
    pub async fn create(
        &self,
        name: String,
        email: String,
        password: String,
        role: Role,
    ) -> Result<user::Model, InternalError> {
        // Check for an existing account first to give a clean conflict error
        let existing = self.find_by_email(&email).await?;
        if existing.is_some() {
            return Err(InternalError::DuplicateEmail(email));
        }

        let password_hash = bcrypt::hash(&password, BCRYPT_COST)
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        let new_user = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            email: Set(email.clone()),
            password_hash: Set(Some(password_hash)),
            role: Set(role.as_str().to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // Concurrent insert can still hit the unique constraint
            if e.to_string().contains("UNIQUE") {
                InternalError::DuplicateEmail(email)
            } else {
                InternalError::database("create_user", e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_store() -> UserStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        UserStore::new(db)
    }

    #[tokio::test]
    async fn test_create_hashes_password_with_bcrypt() {
        let store = setup_store().await;

        let user = store
            .create(
                "Ana".to_string(),
                "ana@x.com".to_string(),
                "secret1".to_string(),
                Role::User,
            )
            .await
            .unwrap();

        let hash = user.password_hash.expect("hash should be stored");
        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$2"));
        assert!(bcrypt::verify("secret1", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = setup_store().await;

        store
            .create(
                "Ana".to_string(),
                "ana@x.com".to_string(),
                "secret1".to_string(),
                Role::User,
            )
            .await
            .unwrap();

        let result = store
            .create(
                "Otra Ana".to_string(),
                "ana@x.com".to_string(),
                "secret2".to_string(),
                Role::Admin,
            )
            .await;

        match result {
            Err(InternalError::DuplicateEmail(email)) => assert_eq!(email, "ana@x.com"),
            other => panic!("Expected DuplicateEmail, got {:?}", other.map(|u| u.email)),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_exact_match_only() {
        let store = setup_store().await;

        store
            .create(
                "Ana".to_string(),
                "ana@x.com".to_string(),
                "secret1".to_string(),
                Role::User,
            )
            .await
            .unwrap();

        assert!(store.find_by_email("ana@x.com").await.unwrap().is_some());
        assert!(store.find_by_email("ANA@x.com").await.unwrap().is_none());
        assert!(store.find_by_email("ana@x.co").await.unwrap().is_none());
    }
}
