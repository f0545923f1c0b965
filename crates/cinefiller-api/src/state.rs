//! Shared application state.

use std::sync::Arc;

use cinefiller_core::repository::{CharacterRepository, ContentRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of project scripts.
    pub content_repository: Arc<dyn ContentRepository>,
    /// Source of project characters.
    pub character_repository: Arc<dyn CharacterRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        content_repository: Arc<dyn ContentRepository>,
        character_repository: Arc<dyn CharacterRepository>,
    ) -> Self {
        Self {
            content_repository,
            character_repository,
        }
    }
}
