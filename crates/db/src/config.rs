//! Connection settings for the recipes database.
//!
//! The repository never reads the environment itself; callers build a
//! [`DbConfig`] (by hand, from the environment, or from CLI flags) and pass
//! it in at construction time.

use sqlx::postgres::PgConnectOptions;
use std::env;

use crate::DbError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DBNAME: &str = "recipes_directory";

pub const HOST_VAR: &str = "RECIPES_DB_HOST";
pub const PORT_VAR: &str = "RECIPES_DB_PORT";
pub const DBNAME_VAR: &str = "RECIPES_DB_NAME";
pub const USER_VAR: &str = "RECIPES_DB_USER";
pub const PASSWORD_VAR: &str = "RECIPES_DB_PASSWORD";

/// Where the `recipes` table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    /// Falls back to `PGUSER` / the OS user when unset.
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            dbname: DEFAULT_DBNAME.to_owned(),
            user: None,
            password: None,
        }
    }
}

impl DbConfig {
    /// Load the configuration from the `RECIPES_DB_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidConfig` if `RECIPES_DB_PORT` is not a port number.
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] but over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                DbError::InvalidConfig(format!("{PORT_VAR}={raw:?} is not a valid port: {e}"))
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
            dbname: lookup(DBNAME_VAR).unwrap_or(defaults.dbname),
            user: lookup(USER_VAR),
            password: lookup(PASSWORD_VAR),
        })
    }

    /// Build the driver-level connection options.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.dbname);

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }

        options
    }
}
