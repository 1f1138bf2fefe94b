//! Repositories — one method per database operation.
//!
//! Every method issues exactly one statement and returns a
//! `Result<T, DbError>`.  No business logic, no caching — pure SQL.

pub mod recipes;
