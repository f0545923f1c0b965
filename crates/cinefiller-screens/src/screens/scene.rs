//! Scene screen: one scene with its resolved characters.

use std::sync::Arc;

use async_trait::async_trait;
use cinefiller_content::application::query_handlers::{self, SceneView};
use cinefiller_core::error::DomainError;
use cinefiller_core::repository::{CharacterRepository, ContentRepository};

use crate::screen::Screen;

/// Navigation parameters of the scene screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneParams {
    /// Project the script belongs to.
    pub project_id: String,
    /// Script to open.
    pub script_id: String,
    /// Label of the scene to open.
    pub scene_number: String,
}

/// Loads a scene and resolves its character references.
pub struct SceneScreen {
    content: Arc<dyn ContentRepository>,
    characters: Arc<dyn CharacterRepository>,
}

impl SceneScreen {
    /// Creates the screen over the given repositories.
    #[must_use]
    pub fn new(
        content: Arc<dyn ContentRepository>,
        characters: Arc<dyn CharacterRepository>,
    ) -> Self {
        Self {
            content,
            characters,
        }
    }
}

#[async_trait]
impl Screen for SceneScreen {
    type Params = SceneParams;
    type Data = SceneView;

    const NAME: &'static str = "scene";

    async fn load(&self, params: &SceneParams) -> Result<Option<SceneView>, DomainError> {
        query_handlers::get_scene_view(
            &params.project_id,
            &params.script_id,
            &params.scene_number,
            self.content.as_ref(),
            self.characters.as_ref(),
        )
        .await
    }
}
