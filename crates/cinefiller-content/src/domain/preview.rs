//! Bounded-length previews for scene list display.

use cinefiller_core::model::SceneScript;
use serde::Serialize;

/// Maximum number of characters kept from a scene description.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 100;

/// Appended to a description that was cut short.
pub const ELLIPSIS: &str = "...";

/// Truncates `text` to [`DESCRIPTION_PREVIEW_LIMIT`] characters, appending
/// [`ELLIPSIS`] when anything was cut. Text within the limit is returned
/// unchanged.
///
/// Length is counted in `char`s, so a multi-byte code point is never split.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

/// One row of the story-line scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneSummary {
    /// The scene label.
    pub scene_number: String,
    /// Heading, or `Scene {n}` when the scene has none.
    pub heading: String,
    /// Truncated action text; empty when the scene has no action.
    pub description: String,
    /// Number of dialogue lines in the scene.
    pub dialogue_count: usize,
}

impl SceneSummary {
    /// Builds the list row for `scene`.
    #[must_use]
    pub fn of(scene: &SceneScript) -> Self {
        Self {
            scene_number: scene.scene_number.clone(),
            heading: scene.display_heading(),
            description: truncate_description(scene.action.as_deref().unwrap_or_default()),
            dialogue_count: scene.dialogue.len(),
        }
    }
}
