use std::env;

use crate::config::{parse_var, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-backend".to_string());
        let access_token_expiry = parse_var("JWT_ACCESS_EXPIRY", 1800_i64)?;

        Self::validated(secret_key, issuer, access_token_expiry)
    }

    fn validated(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, ConfigError> {
        // HS256 keys shorter than the digest size weaken the tag
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
