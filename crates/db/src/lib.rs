//! `db` crate — pure persistence layer for the recipes directory.
//!
//! Provides the connection settings, a single-connection opener, the
//! `Recipe` row struct and the read-only `RecipesRepository`.  Seed helpers
//! used by the test suite and the CLI live in [`seed`].  No business logic
//! lives here.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;

pub use config::DbConfig;
pub use error::DbError;
pub use models::Recipe;
pub use repository::recipes::RecipesRepository;
