use async_trait::async_trait;

use super::{Argon2Hasher, BcryptHasher};
use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};

/// New hashes are argon2id. Verification dispatches on the stored hash
/// prefix so bcrypt hashes keep working.
#[derive(Clone, Default)]
pub struct MultiSchemeHasher {
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl MultiSchemeHasher {
    pub fn new(argon2: Argon2Hasher) -> Self {
        Self {
            argon2,
            bcrypt: BcryptHasher::default(),
        }
    }
}

#[async_trait]
impl PasswordHasher for MultiSchemeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if hash.starts_with("$argon2") {
            self.argon2.verify_password(password, hash).await
        } else if hash.starts_with("$2") {
            self.bcrypt.verify_password(password, hash).await
        } else {
            Err(HashError::UnsupportedScheme)
        }
    }
}
