//! Single Postgres connection.
//!
//! The repository works over one connection owned by the caller; nothing here
//! pools, retries or validates beyond the driver handshake.

use sqlx::postgres::PgConnection;
use sqlx::ConnectOptions;
use tracing::info;

use crate::{DbConfig, DbError};

/// Open a new connection to the database described by `config`.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, DbError> {
    info!(
        "Connecting to database {} on {}:{}",
        config.dbname, config.host, config.port
    );
    let conn = config
        .connect_options()
        .connect()
        .await
        .map_err(DbError::Connection)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let config = DbConfig {
            port: 1,
            ..DbConfig::default()
        };

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)), "got {err:?}");
    }
}
