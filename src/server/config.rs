use crate::server::{
    error::{config::ConfigError, AppError},
    model::favorite::FavoriteScope,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Whether favorite uniqueness checks look at every user's rows or only the caller's.
    pub favorite_scope: FavoriteScope,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let favorite_scope = match lookup("FAVORITE_SCOPE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "FAVORITE_SCOPE".to_string(),
                value,
            })?,
            None => FavoriteScope::default(),
        };

        Ok(Self {
            database_url,
            host,
            port,
            favorite_scope,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
