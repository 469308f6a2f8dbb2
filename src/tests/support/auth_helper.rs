use std::sync::Arc;
use std::time::Duration;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, MultiSchemeHasher};
use crate::modules::auth::adapter::outgoing::UserRepositoryMemory;
use crate::modules::auth::application::domain::entities::NewUser;
use crate::modules::auth::application::ports::incoming::CredentialGate;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository,
};
use crate::modules::auth::application::services::CredentialGateService;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

fn jwt_config(expiry: i64) -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: expiry,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(jwt_config(3600)))
}

/// Cheap argon2 parameters so hashing does not dominate test time.
pub fn test_hasher() -> Arc<dyn PasswordHasher + Send + Sync> {
    let argon2 = Argon2Hasher::with_params(1024, 1, 1).unwrap();
    Arc::new(MultiSchemeHasher::new(argon2))
}

/// Gate with an empty user store. Enough for token verification.
pub fn test_gate() -> Arc<dyn CredentialGate + Send + Sync> {
    let users = UserRepositoryMemory::new(Duration::from_secs(1));
    Arc::new(CredentialGateService::new(
        users,
        test_hasher(),
        test_token_provider(),
    ))
}

/// Gate whose store holds `admin` / [`TEST_ADMIN_PASSWORD`].
pub async fn seeded_gate() -> Arc<dyn CredentialGate + Send + Sync> {
    let users = UserRepositoryMemory::new(Duration::from_secs(1));
    let hasher = test_hasher();
    let password_hash = hasher.hash_password(TEST_ADMIN_PASSWORD).await.unwrap();
    users
        .create_user(NewUser {
            username: "admin".to_string(),
            password_hash,
        })
        .await
        .unwrap();

    Arc::new(CredentialGateService::new(
        users,
        hasher,
        test_token_provider(),
    ))
}

pub fn valid_token(username: &str) -> String {
    test_token_provider().issue(username).unwrap().access_token
}

/// Signed with the test secret but already past its expiry.
pub fn expired_token(username: &str) -> String {
    JwtTokenService::new(jwt_config(-10))
        .issue(username)
        .unwrap()
        .access_token
}

pub fn bearer(username: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", valid_token(username)))
}

/// Gate registered the way `main` registers it, for handlers that take `AdminUser`.
pub fn gate_data() -> actix_web::web::Data<Arc<dyn CredentialGate + Send + Sync>> {
    actix_web::web::Data::new(test_gate())
}
