//! Server configuration loaded from the environment

use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context, bail};
use auth::AuthConfig;
use tracing::{info, warn};

/// Upper bound for `TOKEN_TTL_SECS` (one year)
const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let mut auth = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => AuthConfig::with_secret(secret),
            _ if cfg!(debug_assertions) => {
                warn!("JWT_SECRET not set, using a random secret; tokens die with the process");
                AuthConfig::with_random_secret()
            }
            _ => bail!("JWT_SECRET must be set in production"),
        };
        auth.token_ttl = token_ttl(try_load("TOKEN_TTL_SECS", "3600")?)?;
        auth.cookie_secure = try_load(
            "COOKIE_SECURE",
            if cfg!(debug_assertions) { "false" } else { "true" },
        )?;

        let frontend_origins = try_load::<String>("FRONTEND_ORIGINS", "http://localhost:3000")?
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            database_max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5")?,
            port: try_load("PORT", "5000")?,
            frontend_origins,
            auth,
        })
    }
}

fn token_ttl(secs: u64) -> anyhow::Result<Duration> {
    if secs == 0 || secs > MAX_TOKEN_TTL_SECS {
        bail!("Invalid TOKEN_TTL_SECS value: {secs} (expected 1..={MAX_TOKEN_TTL_SECS})");
    }
    Ok(Duration::from_secs(secs))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value: {e}"))
}
