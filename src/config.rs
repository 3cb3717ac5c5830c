use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "campus_connect.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:30500";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server settings, resolved from environment values with local defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_pool_size: u32,
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().trim_end_matches('/').to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        // the CORS layer refuses to start on a wildcard or a malformed origin
        if let Some(origin) = cors_origins
            .iter()
            .find(|origin| *origin == "*" || origin.parse::<actix_web::http::Uri>().is_err())
        {
            return Err(ConfigError::Invalid {
                key: "CORS_ORIGINS",
                expected: "list of explicit origins",
                value: origin.clone(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse(&lookup, "PORT", "port number", DEFAULT_PORT)?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_pool_size: parse(
                &lookup,
                "DATABASE_POOL_SIZE",
                "pool size",
                DEFAULT_POOL_SIZE,
            )?,
            cors_origins,
            bcrypt_cost: parse(&lookup, "BCRYPT_COST", "bcrypt cost", bcrypt::DEFAULT_COST)?,
        })
    }
}

pub(crate) fn parse<F, T>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
