use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::IssuedToken;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Username
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError>;
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenError>;
}
