//! Read-only access to the `recipes` table.

use sqlx::postgres::PgConnection;
use tracing::debug;

use crate::{connection, models::Recipe, DbConfig, DbError};

const SELECT_ALL: &str = "SELECT id, name, average_cooking_time, rating FROM recipes";

const SELECT_BY_ID: &str =
    "SELECT id, name, average_cooking_time, rating FROM recipes WHERE id = $1";

/// Reads `recipes` rows into [`Recipe`] values.
///
/// Holds a single connection handed in by the caller.  Each call re-reads the
/// table; returned recipes are owned by the caller.
pub struct RecipesRepository {
    conn: PgConnection,
}

impl RecipesRepository {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Open a connection for `config` and wrap it.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let conn = connection::connect(config).await?;
        Ok(Self::new(conn))
    }

    /// Give the connection back to the caller.
    pub fn into_inner(self) -> PgConnection {
        self.conn
    }

    /// Return every recipe in the order the database yields them.
    ///
    /// An empty table gives an empty `Vec`.
    pub async fn all(&mut self) -> Result<Vec<Recipe>, DbError> {
        let rows = sqlx::query_as::<_, Recipe>(SELECT_ALL)
            .fetch_all(&mut self.conn)
            .await?;

        debug!(count = rows.len(), "loaded recipes");
        Ok(rows)
    }

    /// Fetch a single recipe by its primary key.
    ///
    /// Returns `DbError::NotFound(id)` if no row has that id.
    pub async fn find(&mut self, id: i32) -> Result<Recipe, DbError> {
        let row = sqlx::query_as::<_, Recipe>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?
            .ok_or(DbError::NotFound(id))?;

        debug!(id, "loaded recipe");
        Ok(row)
    }
}
