//! `PostgreSQL` implementation of the `CharacterRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use cinefiller_core::error::DomainError;
use cinefiller_core::model::CharacterProfile;
use cinefiller_core::repository::CharacterRepository;

use crate::schema::SELECT_CHARACTERS;

/// PostgreSQL-backed character repository.
#[derive(Debug, Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Creates a new `PgCharacterRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn get_characters(
        &self,
        project_id: &str,
    ) -> Result<Vec<CharacterProfile>, DomainError> {
        let rows: Vec<(String, String, Option<String>)> = sqlx::query_as(SELECT_CHARACTERS)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("failed to load characters: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, description)| CharacterProfile {
                id,
                name,
                description,
            })
            .collect())
    }
}
