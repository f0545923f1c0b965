//! `PostgreSQL` implementation of the `ContentRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use cinefiller_core::error::DomainError;
use cinefiller_core::model::{SceneScript, Script};
use cinefiller_core::repository::ContentRepository;

use crate::schema::SELECT_SCRIPTS;

/// PostgreSQL-backed script repository.
#[derive(Debug, Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    /// Creates a new `PgContentRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn get_scripts(&self, project_id: &str) -> Result<Vec<Script>, DomainError> {
        let rows: Vec<(String, String, serde_json::Value)> = sqlx::query_as(SELECT_SCRIPTS)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("failed to load scripts: {e}")))?;

        debug!(project_id, rows = rows.len(), "loaded scripts");

        rows.into_iter()
            .map(|(id, title, scenes)| {
                let scene_scripts: Vec<SceneScript> =
                    serde_json::from_value(scenes).map_err(|e| {
                        DomainError::Infrastructure(format!(
                            "scene deserialization failed for script {id}: {e}"
                        ))
                    })?;
                Ok(Script {
                    id,
                    project_id: project_id.to_owned(),
                    title,
                    scene_scripts,
                })
            })
            .collect()
    }
}
