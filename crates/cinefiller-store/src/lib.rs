//! PostgreSQL persistence for Cinefiller content.
//!
//! Scripts are stored one row per script with their scenes as a JSONB
//! document; characters are stored one row per character. Both tables carry
//! an explicit `position` column that defines repository order.

pub mod pg_character_repository;
pub mod pg_content_repository;
pub mod schema;

use sqlx::migrate::Migrator;

/// Embedded migrations for the content tables.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");
