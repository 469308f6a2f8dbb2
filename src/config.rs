use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Password the admin account ships with when nothing is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("ADMIN_PASSWORD is still the default; set a real password before running in production")]
    InsecureAdminPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::Invalid {
                key: "STORE_BACKEND",
                reason: format!("expected 'postgres' or 'memory', got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub fixtures_path: Option<PathBuf>,
    pub lock_timeout: Duration,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", 8000_u16)?;
        let backend = match env::var("STORE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::Postgres,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let fixtures_path = env::var("FIXTURES_PATH").ok().map(PathBuf::from);
        let lock_timeout = Duration::from_millis(parse_var("LOCK_TIMEOUT_MS", 5000_u64)?);
        let run_migrations = parse_var("RUN_MIGRATIONS", false)?;

        Ok(Self {
            host,
            port,
            backend,
            database_url,
            fixtures_path,
            lock_timeout,
            run_migrations,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Identity seeded into the user store at startup.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        let production = env::var("RUST_ENV").as_deref() == Ok("production");

        Self::checked(username, password, production)
    }

    fn checked(username: String, password: String, production: bool) -> Result<Self, ConfigError> {
        if username.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "ADMIN_USERNAME",
                reason: "must not be blank".to_string(),
            });
        }
        if password.is_empty() {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD",
                reason: "must not be empty".to_string(),
            });
        }

        if password == DEFAULT_ADMIN_PASSWORD {
            if production {
                return Err(ConfigError::InsecureAdminPassword);
            }
            warn!(
                username = %username,
                "ADMIN_PASSWORD is the built-in default; do not expose this instance"
            );
        }

        Ok(Self {
            username: username.trim().to_string(),
            password,
        })
    }

    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

pub(crate) fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
