use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};

use crate::modules::auth::application::ports::incoming::{AuthError, CredentialGate};

// ========================= Login Request =========================
/// Validated login request, deserialized directly from JSON.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }
        // Passwords are compared as typed; only emptiness is rejected.
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Storage is busy, retry later")]
    Contention,

    #[error("Login failed: {0}")]
    Internal(String),
}

impl From<AuthError> for LoginError {
    fn from(err: AuthError) -> Self {
        use crate::shared::store::RepositoryError;

        match err {
            AuthError::InvalidCredentials => LoginError::InvalidCredentials,
            AuthError::Repository(RepositoryError::Contention) => LoginError::Contention,
            other => LoginError::Internal(other.to_string()),
        }
    }
}

// ============================ Login Response =================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase {
    gate: Arc<dyn CredentialGate + Send + Sync>,
}

impl LoginUserUseCase {
    pub fn new(gate: Arc<dyn CredentialGate + Send + Sync>) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let authenticated = self
            .gate
            .authenticate(request.username(), request.password())
            .await
            .map_err(|e| {
                error!(username = request.username(), error = %e, "Authentication errored");
                LoginError::from(e)
            })?;

        if !authenticated {
            return Err(LoginError::InvalidCredentials);
        }

        let issued = self.gate.issue_token(request.username())?;
        info!(username = request.username(), "Admin logged in");

        Ok(LoginUserResponse {
            access_token: issued.access_token,
            token_type: issued.token_type.to_string(),
            expires_in: issued.expires_in,
        })
    }
}
