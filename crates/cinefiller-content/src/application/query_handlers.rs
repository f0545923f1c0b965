//! Query handlers for script content.
//!
//! Each handler loads the full project collection from its repository, then
//! narrows it with the first-match lookups in [`crate::domain::lookup`]. A
//! target that does not exist yields `Ok(None)`; only repository failures and
//! invalid parameters are errors.

use cinefiller_core::error::DomainError;
use cinefiller_core::model::{CharacterProfile, DialogueLine, SceneScript, Script};
use cinefiller_core::repository::{CharacterRepository, ContentRepository};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::lookup;
use crate::domain::preview::SceneSummary;

/// Read-only view backing the story-line screen: a script and its scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryLineView {
    /// The owning project.
    pub project_id: String,
    /// The script identifier.
    pub script_id: String,
    /// The script title.
    pub title: String,
    /// One summary per scene, in script order.
    pub scenes: Vec<SceneSummary>,
}

/// Read-only view backing the scene screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneView {
    /// The owning project.
    pub project_id: String,
    /// The script the scene belongs to.
    pub script_id: String,
    /// Heading, or `Scene {n}` when the scene has none.
    pub heading: String,
    /// The scene itself.
    pub scene: SceneScript,
    /// Profiles for the scene's character references that resolved.
    pub characters: Vec<CharacterProfile>,
}

/// Read-only view backing the dialogue screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueView {
    /// The owning project.
    pub project_id: String,
    /// The script the line belongs to.
    pub script_id: String,
    /// The scene the line belongs to.
    pub scene_number: String,
    /// The dialogue line.
    pub line: DialogueLine,
    /// Every character of the project, for speaker selection.
    pub characters: Vec<CharacterProfile>,
}

fn require_project_id(project_id: &str) -> Result<(), DomainError> {
    if project_id.trim().is_empty() {
        return Err(DomainError::Validation("project id must not be empty".into()));
    }
    Ok(())
}

/// Retrieves a script by id.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if the repository fails.
#[instrument(level = "debug", skip(repo))]
pub async fn get_script(
    project_id: &str,
    script_id: &str,
    repo: &dyn ContentRepository,
) -> Result<Option<Script>, DomainError> {
    require_project_id(project_id)?;
    let scripts = repo.get_scripts(project_id).await?;
    let found = lookup::find_script(&scripts, script_id).cloned();
    if found.is_none() {
        debug!(script_count = scripts.len(), "script not found");
    }
    Ok(found)
}

/// Retrieves a scene of a script by scene number.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_scene(
    project_id: &str,
    script_id: &str,
    scene_number: &str,
    repo: &dyn ContentRepository,
) -> Result<Option<SceneScript>, DomainError> {
    let script = get_script(project_id, script_id, repo).await?;
    Ok(script.and_then(|script| lookup::find_scene(&script, scene_number).cloned()))
}

/// Retrieves the first line of a scene spoken under `character_name`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_dialogue_line(
    project_id: &str,
    script_id: &str,
    scene_number: &str,
    character_name: &str,
    repo: &dyn ContentRepository,
) -> Result<Option<DialogueLine>, DomainError> {
    let scene = get_scene(project_id, script_id, scene_number, repo).await?;
    Ok(scene.and_then(|scene| lookup::find_dialogue_line(&scene, character_name).cloned()))
}

/// Resolves character references against the project's characters. The
/// character collection is fetched once; unresolved references are dropped.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if the repository fails.
#[instrument(level = "debug", skip(repo))]
pub async fn get_scene_characters(
    project_id: &str,
    character_ids: &[String],
    repo: &dyn CharacterRepository,
) -> Result<Vec<CharacterProfile>, DomainError> {
    require_project_id(project_id)?;
    let characters = repo.get_characters(project_id).await?;
    Ok(lookup::resolve_characters(&characters, character_ids))
}

/// Builds the story-line view for a script.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_story_line(
    project_id: &str,
    script_id: &str,
    repo: &dyn ContentRepository,
) -> Result<Option<StoryLineView>, DomainError> {
    let Some(script) = get_script(project_id, script_id, repo).await? else {
        return Ok(None);
    };
    Ok(Some(StoryLineView {
        project_id: project_id.to_owned(),
        script_id: script.id,
        title: script.title,
        scenes: script.scene_scripts.iter().map(SceneSummary::of).collect(),
    }))
}

/// Builds the scene view: the scene plus its resolved characters. Characters
/// are only fetched once the scene is known to exist.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if either repository fails.
pub async fn get_scene_view(
    project_id: &str,
    script_id: &str,
    scene_number: &str,
    content_repo: &dyn ContentRepository,
    character_repo: &dyn CharacterRepository,
) -> Result<Option<SceneView>, DomainError> {
    let Some(scene) = get_scene(project_id, script_id, scene_number, content_repo).await? else {
        return Ok(None);
    };
    let characters = get_scene_characters(project_id, &scene.character_ids, character_repo).await?;
    Ok(Some(SceneView {
        project_id: project_id.to_owned(),
        script_id: script_id.to_owned(),
        heading: scene.display_heading(),
        scene,
        characters,
    }))
}

/// Builds the dialogue view: the line plus every character of the project.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `project_id` is blank.
/// Returns `DomainError::Infrastructure` if either repository fails.
pub async fn get_dialogue_view(
    project_id: &str,
    script_id: &str,
    scene_number: &str,
    character_name: &str,
    content_repo: &dyn ContentRepository,
    character_repo: &dyn CharacterRepository,
) -> Result<Option<DialogueView>, DomainError> {
    let Some(line) =
        get_dialogue_line(project_id, script_id, scene_number, character_name, content_repo)
            .await?
    else {
        return Ok(None);
    };
    let characters = character_repo.get_characters(project_id).await?;
    Ok(Some(DialogueView {
        project_id: project_id.to_owned(),
        script_id: script_id.to_owned(),
        scene_number: scene_number.to_owned(),
        line,
        characters,
    }))
}

#[cfg(test)]
mod tests {
    use cinefiller_core::error::DomainError;
    use cinefiller_test_support::fixtures::{sample_characters, sample_scripts};
    use cinefiller_test_support::{
        FailingCharacterRepository, FailingContentRepository, InMemoryCharacterRepository,
        InMemoryContentRepository,
    };

    use super::*;

    fn content() -> InMemoryContentRepository {
        InMemoryContentRepository::new(sample_scripts())
    }

    fn characters() -> InMemoryCharacterRepository {
        InMemoryCharacterRepository::new().with_characters("p1", sample_characters())
    }

    #[tokio::test]
    async fn test_get_script_returns_matching_script() {
        // Arrange
        let repo = content();

        // Act
        let script = get_script("p1", "s1", &repo).await.unwrap();

        // Assert
        let script = script.unwrap();
        assert_eq!(script.id, "s1");
        assert_eq!(script.scene_scripts.len(), 2);
        assert_eq!(repo.requested_projects(), vec!["p1".to_owned()]);
    }

    #[tokio::test]
    async fn test_get_script_returns_none_for_unknown_script() {
        let repo = content();

        let script = get_script("p1", "nope", &repo).await.unwrap();

        assert!(script.is_none());
    }

    #[tokio::test]
    async fn test_get_script_scopes_to_project() {
        let repo = content();

        let script = get_script("p2", "s1", &repo).await.unwrap();

        assert!(script.is_none());
    }

    #[tokio::test]
    async fn test_get_script_rejects_blank_project_id_without_calling_repo() {
        // Arrange
        let repo = content();

        // Act
        let result = get_script("  ", "s1", &repo).await;

        // Assert
        match result {
            Err(DomainError::Validation(_)) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(repo.requested_projects().is_empty());
    }

    #[tokio::test]
    async fn test_get_script_propagates_repository_failure() {
        let result = get_script("p1", "s1", &FailingContentRepository).await;

        match result {
            Err(DomainError::Infrastructure(message)) => {
                assert_eq!(message, "connection refused");
            }
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_scene_finds_scene_two_but_not_ninety_nine() {
        // Arrange
        let repo = content();

        // Act
        let two = get_scene("p1", "s1", "2", &repo).await.unwrap();
        let missing = get_scene("p1", "s1", "99", &repo).await.unwrap();

        // Assert
        assert_eq!(two.unwrap().scene_number, "2");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_scene_of_unknown_script_is_none() {
        let repo = content();

        let scene = get_scene("p1", "missing", "1", &repo).await.unwrap();

        assert!(scene.is_none());
    }

    #[tokio::test]
    async fn test_get_dialogue_line_by_character_name() {
        let repo = content();

        let line = get_dialogue_line("p1", "s1", "1", "JONAH", &repo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(line.dialogue, "The train was later.");
        assert_eq!(line.character_id, "c-jonah");
    }

    #[tokio::test]
    async fn test_get_scene_characters_drops_unknown_references() {
        // Arrange
        let repo = characters();
        let ids = vec!["c-ghost".to_owned(), "c-jonah".to_owned()];

        // Act
        let resolved = get_scene_characters("p1", &ids, &repo).await.unwrap();

        // Assert
        let names: Vec<&str> = resolved.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Jonah"]);
    }

    #[tokio::test]
    async fn test_get_story_line_summarizes_scenes() {
        // Arrange
        let repo = content();

        // Act
        let view = get_story_line("p1", "s1", &repo).await.unwrap().unwrap();

        // Assert
        assert_eq!(view.script_id, "s1");
        assert_eq!(view.title, "Script s1");
        assert_eq!(view.scenes.len(), 2);
        assert_eq!(view.scenes[0].heading, "INT. COFFEE SHOP - DAY");
        assert_eq!(view.scenes[0].dialogue_count, 2);
        assert_eq!(view.scenes[1].heading, "Scene 2");
    }

    #[tokio::test]
    async fn test_get_scene_view_resolves_characters() {
        // Arrange
        let content = content();
        let characters = characters();

        // Act
        let view = get_scene_view("p1", "s1", "1", &content, &characters)
            .await
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(view.heading, "INT. COFFEE SHOP - DAY");
        let names: Vec<&str> = view.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Mara", "Jonah"]);
    }

    #[tokio::test]
    async fn test_get_scene_view_skips_characters_when_scene_missing() {
        let content = content();

        let view = get_scene_view("p1", "s1", "99", &content, &FailingCharacterRepository)
            .await
            .unwrap();

        assert!(view.is_none());
    }

    #[tokio::test]
    async fn test_get_scene_view_propagates_character_failure() {
        let content = content();

        let result = get_scene_view("p1", "s1", "1", &content, &FailingCharacterRepository).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn test_get_dialogue_view_lists_all_project_characters() {
        // Arrange
        let content = content();
        let characters = characters();

        // Act
        let view = get_dialogue_view("p1", "s1", "1", "MARA", &content, &characters)
            .await
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(view.line.dialogue, "You're late.");
        assert_eq!(view.scene_number, "1");
        assert_eq!(view.characters.len(), 2);
    }

    #[tokio::test]
    async fn test_get_dialogue_view_unknown_speaker_is_none() {
        let content = content();
        let characters = characters();

        let view = get_dialogue_view("p1", "s1", "2", "MARA", &content, &characters)
            .await
            .unwrap();

        assert!(view.is_none());
    }
}
