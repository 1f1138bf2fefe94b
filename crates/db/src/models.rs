//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// recipes
// ---------------------------------------------------------------------------

/// A single row of the `recipes` table.
///
/// `average_cooking_time` (minutes) and `rating` are stored as text and are
/// returned exactly as the database holds them.  The text columns are
/// nullable, so a `NULL` comes back as `None` rather than failing the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i32,
    pub name: Option<String>,
    pub average_cooking_time: Option<String>,
    pub rating: Option<String>,
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn or_dash(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("-")
        }

        write!(
            f,
            "{} - {} ({} min, rated {})",
            self.id,
            or_dash(&self.name),
            or_dash(&self.average_cooking_time),
            or_dash(&self.rating)
        )
    }
}
