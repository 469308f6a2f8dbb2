pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod multi_scheme_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use multi_scheme_hasher::MultiSchemeHasher;
