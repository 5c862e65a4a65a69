use rand::Rng;

use crate::server::error::config::ConfigError;

/// Minimum length of the cookie signing secret, in bytes.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Secret signing the impersonation cookie
    pub cookie_secret: Vec<u8>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            valkey_url: require_env("VALKEY_URL")?,
            cookie_secret: cookie_secret(std::env::var("COOKIE_SECRET").ok(), development_mode())?,
        })
    }
}

/// Debug builds run in local development mode: cookies are not marked secure and a random
/// cookie secret is generated when none is configured.
pub fn development_mode() -> bool {
    cfg!(debug_assertions)
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn cookie_secret(value: Option<String>, development: bool) -> Result<Vec<u8>, ConfigError> {
    let secret = match value {
        Some(secret) => secret.into_bytes(),
        // Impersonation cookies signed with a random secret do not survive a restart
        None if development => {
            let mut secret = vec![0u8; MIN_COOKIE_SECRET_LEN];
            rand::rng().fill(secret.as_mut_slice());
            return Ok(secret);
        }
        None => return Err(ConfigError::MissingEnvVar("COOKIE_SECRET".to_string())),
    };

    if secret.len() < MIN_COOKIE_SECRET_LEN {
        return Err(ConfigError::CookieSecretTooShort {
            len: secret.len(),
            min: MIN_COOKIE_SECRET_LEN,
        });
    }

    Ok(secret)
}
