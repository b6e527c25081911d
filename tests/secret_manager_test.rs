// SecretManager behavior against real environment variables
//
// Environment state is process-global, so every test takes the same lock.

use std::sync::{Mutex, MutexGuard, OnceLock};

use deudas_backend::config::{SecretError, SecretManager};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the env lock and restores a clean slate on drop
struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SESSION_TTL_MINUTES");
        Self { _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SESSION_TTL_MINUTES");
    }
}

#[test]
fn test_init_fails_without_jwt_secret() {
    let _guard = EnvGuard::new();

    let result = SecretManager::init();
    assert!(matches!(result, Err(SecretError::Missing { .. })));
}

#[test]
fn test_init_rejects_short_jwt_secret() {
    let _guard = EnvGuard::new();
    std::env::set_var("JWT_SECRET", "too-short");

    let result = SecretManager::init();
    assert!(matches!(result, Err(SecretError::InvalidLength { .. })));
}

#[test]
fn test_init_defaults_session_ttl() {
    let _guard = EnvGuard::new();
    std::env::set_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long");

    let manager = SecretManager::init().unwrap();
    assert_eq!(manager.session_ttl_minutes(), 480);
    assert_eq!(
        manager.jwt_secret(),
        "test-secret-key-minimum-32-characters-long"
    );
}

#[test]
fn test_init_reads_configured_session_ttl() {
    let _guard = EnvGuard::new();
    std::env::set_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long");
    std::env::set_var("SESSION_TTL_MINUTES", "15");

    let manager = SecretManager::init().unwrap();
    assert_eq!(manager.session_ttl_minutes(), 15);
}

#[test]
fn test_init_rejects_non_positive_session_ttl() {
    let _guard = EnvGuard::new();
    std::env::set_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long");
    std::env::set_var("SESSION_TTL_MINUTES", "0");

    let result = SecretManager::init();
    assert!(matches!(result, Err(SecretError::InvalidValue { .. })));

    std::env::set_var("SESSION_TTL_MINUTES", "soon");
    let result = SecretManager::init();
    assert!(matches!(result, Err(SecretError::InvalidValue { .. })));
}
