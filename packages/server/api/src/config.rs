use anyhow::{anyhow, Context, Result};
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Account created on startup when the database has no administrator.
#[derive(Debug, Clone)]
pub struct DefaultAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub session_secure: bool,
    pub default_admin: DefaultAdmin,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        Ok(Self {
            database_url,
            bind_addr: try_load(&lookup, "BIND_ADDR", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "3001")?,
            session_secure: try_load(&lookup, "SESSION_SECURE", "false")?,
            default_admin: DefaultAdmin {
                name: lookup("DEFAULT_ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
                email: lookup("DEFAULT_ADMIN_EMAIL")
                    .unwrap_or_else(|| "admin@sapi.com".to_string()),
                password: lookup("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|| {
                    tracing::warn!("DEFAULT_ADMIN_PASSWORD not set, using built-in default");
                    "admin123".to_string()
                }),
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
