//! Dialogue screen: a single line and the project's characters.

use std::sync::Arc;

use async_trait::async_trait;
use cinefiller_content::application::query_handlers::{self, DialogueView};
use cinefiller_core::error::DomainError;
use cinefiller_core::repository::{CharacterRepository, ContentRepository};

use crate::screen::Screen;

/// Navigation parameters of the dialogue screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueParams {
    /// Project the script belongs to.
    pub project_id: String,
    /// Script to open.
    pub script_id: String,
    /// Label of the scene to open.
    pub scene_number: String,
    /// Speaker whose first line in the scene is shown.
    pub character_name: String,
}

/// Loads a dialogue line and every character of its project.
pub struct DialogueScreen {
    content: Arc<dyn ContentRepository>,
    characters: Arc<dyn CharacterRepository>,
}

impl DialogueScreen {
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
impl Screen for DialogueScreen {
    type Params = DialogueParams;
    type Data = DialogueView;

    const NAME: &'static str = "dialogue";

    async fn load(&self, params: &DialogueParams) -> Result<Option<DialogueView>, DomainError> {
        query_handlers::get_dialogue_view(
            &params.project_id,
            &params.script_id,
            &params.scene_number,
            &params.character_name,
            self.content.as_ref(),
            self.characters.as_ref(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cinefiller_test_support::fixtures::{sample_characters, sample_scripts};
    use cinefiller_test_support::{
        FailingCharacterRepository, InMemoryCharacterRepository, InMemoryContentRepository,
    };

    use super::*;
    use crate::controller::ScreenController;
    use crate::state::ScreenState;

    fn params(character_name: &str) -> DialogueParams {
        DialogueParams {
            project_id: "p1".to_owned(),
            script_id: "s1".to_owned(),
            scene_number: "1".to_owned(),
            character_name: character_name.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_dialogue_screen_shows_line_and_all_characters() {
        // Arrange
        let screen = DialogueScreen::new(
            Arc::new(InMemoryContentRepository::new(sample_scripts())),
            Arc::new(InMemoryCharacterRepository::new().with_characters("p1", sample_characters())),
        );
        let mut controller = ScreenController::new(Arc::new(screen));

        // Act
        controller.navigate(params("MARA"));
        let view = controller.settle().await.data().cloned().unwrap();

        // Assert
        assert_eq!(view.line.dialogue, "You're late.");
        assert_eq!(view.characters.len(), 2);
    }

    #[tokio::test]
    async fn test_character_failure_surfaces_as_failed() {
        let screen = DialogueScreen::new(
            Arc::new(InMemoryContentRepository::new(sample_scripts())),
            Arc::new(FailingCharacterRepository),
        );
        let mut controller = ScreenController::new(Arc::new(screen));

        controller.navigate(params("JONAH"));

        assert!(matches!(controller.settle().await, ScreenState::Failed { .. }));
    }
}
