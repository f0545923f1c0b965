//! Story-line screen: a script's scene list.

use std::sync::Arc;

use async_trait::async_trait;
use cinefiller_content::application::query_handlers::{self, StoryLineView};
use cinefiller_core::error::DomainError;
use cinefiller_core::repository::ContentRepository;

use crate::screen::Screen;

/// Navigation parameters of the story-line screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryLineParams {
    /// Project the script belongs to.
    pub project_id: String,
    /// Script to open.
    pub script_id: String,
}

/// Loads a script and summarizes its scenes.
pub struct StoryLineScreen {
    content: Arc<dyn ContentRepository>,
}

impl StoryLineScreen {
    /// Creates the screen over the given content repository.
    #[must_use]
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self { content }
    }
}

#[async_trait]
impl Screen for StoryLineScreen {
    type Params = StoryLineParams;
    type Data = StoryLineView;

    const NAME: &'static str = "story_line";

    async fn load(&self, params: &StoryLineParams) -> Result<Option<StoryLineView>, DomainError> {
        query_handlers::get_story_line(
            &params.project_id,
            &params.script_id,
            self.content.as_ref(),
        )
        .await
    }
}
