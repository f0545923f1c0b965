//! Routes for script, scene and dialogue views.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::instrument;

use cinefiller_content::application::query_handlers::{
    self, DialogueView, SceneView, StoryLineView,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Path parameters for `/{project_id}/scripts/{script_id}`.
#[derive(Debug, Deserialize)]
pub struct ScriptPath {
    pub project_id: String,
    pub script_id: String,
}

/// Path parameters for `.../scenes/{scene_number}`.
#[derive(Debug, Deserialize)]
pub struct ScenePath {
    pub project_id: String,
    pub script_id: String,
    pub scene_number: String,
}

/// Path parameters for `.../dialogue/{character_name}`.
#[derive(Debug, Deserialize)]
pub struct DialoguePath {
    pub project_id: String,
    pub script_id: String,
    pub scene_number: String,
    pub character_name: String,
}

/// GET /{project_id}/scripts/{script_id}
#[instrument(skip(state, path), fields(project_id = %path.project_id, script_id = %path.script_id))]
async fn get_story_line(
    State(state): State<AppState>,
    Path(path): Path<ScriptPath>,
) -> Result<Json<StoryLineView>, ApiError> {
    query_handlers::get_story_line(
        &path.project_id,
        &path.script_id,
        state.content_repository.as_ref(),
    )
    .await?
    .map(Json)
    .ok_or_else(|| {
        ApiError::not_found(
            "script_not_found",
            format!("script {} not found in project {}", path.script_id, path.project_id),
        )
    })
}

/// GET /{project_id}/scripts/{script_id}/scenes/{scene_number}
#[instrument(
    skip(state, path),
    fields(
        project_id = %path.project_id,
        script_id = %path.script_id,
        scene_number = %path.scene_number
    )
)]
async fn get_scene(
    State(state): State<AppState>,
    Path(path): Path<ScenePath>,
) -> Result<Json<SceneView>, ApiError> {
    query_handlers::get_scene_view(
        &path.project_id,
        &path.script_id,
        &path.scene_number,
        state.content_repository.as_ref(),
        state.character_repository.as_ref(),
    )
    .await?
    .map(Json)
    .ok_or_else(|| {
        ApiError::not_found(
            "scene_not_found",
            format!("scene {} not found in script {}", path.scene_number, path.script_id),
        )
    })
}

/// GET /{project_id}/scripts/{script_id}/scenes/{scene_number}/dialogue/{character_name}
#[instrument(
    skip(state, path),
    fields(
        project_id = %path.project_id,
        scene_number = %path.scene_number,
        character_name = %path.character_name
    )
)]
async fn get_dialogue(
    State(state): State<AppState>,
    Path(path): Path<DialoguePath>,
) -> Result<Json<DialogueView>, ApiError> {
    query_handlers::get_dialogue_view(
        &path.project_id,
        &path.script_id,
        &path.scene_number,
        &path.character_name,
        state.content_repository.as_ref(),
        state.character_repository.as_ref(),
    )
    .await?
    .map(Json)
    .ok_or_else(|| {
        ApiError::not_found(
            "dialogue_not_found",
            format!(
                "no line for {} in scene {}",
                path.character_name, path.scene_number
            ),
        )
    })
}

/// Returns the router for script views, mounted under `/api/v1/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{project_id}/scripts/{script_id}", get(get_story_line))
        .route(
            "/{project_id}/scripts/{script_id}/scenes/{scene_number}",
            get(get_scene),
        )
        .route(
            "/{project_id}/scripts/{script_id}/scenes/{scene_number}/dialogue/{character_name}",
            get(get_dialogue),
        )
}
