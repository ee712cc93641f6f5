//! Runtime configuration read from the environment (`.env` is loaded by the binary).

use crate::error::ConfigError;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; when set, the individual parts below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Schema holding the `movie` table.
    pub schema: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let string_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let schema = string_or("DB_SCHEMA", "public");
        if !is_identifier(&schema) {
            return Err(ConfigError::Invalid {
                key: "DB_SCHEMA",
                value: schema,
            });
        }

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: string_or("DB_HOST", "localhost"),
            port: parse_or(&get, "DB_PORT", 5432)?,
            user: string_or("DB_USER", "postgres"),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: string_or("DB_NAME", "movies"),
            schema,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 5)?,
        };
        let server = ServerConfig {
            host: string_or("SERVER_HOST", "0.0.0.0"),
            port: parse_or(&get, "SERVER_PORT", 3000)?,
        };
        Ok(Config { database, server })
    }
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Plain SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
