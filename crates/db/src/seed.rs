//! Table fixtures.
//!
//! Resets `recipes` to a known three-row state.  Used by the integration
//! tests and by `recipes seed`; the repository itself never writes.

use sqlx::postgres::PgConnection;
use tracing::info;

use crate::DbError;

/// Creates the `recipes` table if it is missing.
pub const SCHEMA_SQL: &str = include_str!("../sql/recipes_table.sql");

/// Truncates `recipes` and inserts the three reference rows.
pub const SEED_SQL: &str = include_str!("../sql/seeds_recipes.sql");

/// Run a raw, possibly multi-statement, SQL script.
pub async fn apply_script(conn: &mut PgConnection, sql: &str) -> Result<(), DbError> {
    let result = sqlx::raw_sql(sql).execute(&mut *conn).await?;
    info!(rows_affected = result.rows_affected(), "applied SQL script");
    Ok(())
}

/// Ensure the table exists and load the reference rows.
pub async fn reset_recipes_table(conn: &mut PgConnection) -> Result<(), DbError> {
    apply_script(conn, SCHEMA_SQL).await?;
    apply_script(conn, SEED_SQL).await
}
