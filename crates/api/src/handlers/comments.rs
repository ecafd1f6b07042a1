//! Handlers for the public comment endpoints.
//!
//! No authentication: anyone who can reach a published storyboard can read
//! its comment threads and submit feedback. Validation happens before any
//! store access; field errors surface as 400 with a precise message.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use storyfeed_core::comments::{
    validate_author_name, validate_comment_text, validate_scene_number, validate_slug,
};
use storyfeed_db::models::comment::CreateComment;
use storyfeed_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CommentListResponse, CommentWriteResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for listing one storyboard's comments.
///
/// Fields are `Option` so a missing parameter produces the contract's own
/// 400 JSON body instead of an extractor rejection.
#[derive(Debug, serde::Deserialize)]
pub struct ListCommentsParams {
    pub client: Option<String>,
    pub project: Option<String>,
    pub scene: Option<i32>,
}

/// Request body for submitting a comment.
#[derive(Debug, serde::Deserialize)]
pub struct SubmitCommentRequest {
    pub client: Option<String>,
    pub project: Option<String>,
    pub scene: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub comment_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /comments?client=&project=&scene=
///
/// List comments for a storyboard, optionally narrowed to one scene.
/// The general (whole-project) thread sorts first, then scenes ascending,
/// newest comment first within each thread.
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<ListCommentsParams>,
) -> AppResult<impl IntoResponse> {
    validate_slug("client", params.client.as_deref()).map_err(AppError::BadRequest)?;
    validate_slug("project", params.project.as_deref()).map_err(AppError::BadRequest)?;
    validate_scene_number(params.scene).map_err(AppError::BadRequest)?;

    let comments = CommentRepo::list_by_project(
        &state.pool,
        params.client.as_deref().unwrap_or_default(),
        params.project.as_deref().unwrap_or_default(),
        params.scene,
    )
    .await?;

    Ok(Json(CommentListResponse { comments }))
}

/// POST /comments
///
/// Submit a new comment. The row is inserted with status `pending`;
/// only the server-assigned id and creation timestamp are returned.
pub async fn submit_comment(
    State(state): State<AppState>,
    Json(input): Json<SubmitCommentRequest>,
) -> AppResult<impl IntoResponse> {
    validate_slug("client", input.client.as_deref()).map_err(AppError::BadRequest)?;
    validate_slug("project", input.project.as_deref()).map_err(AppError::BadRequest)?;
    validate_author_name(input.author_name.as_deref()).map_err(AppError::BadRequest)?;
    validate_comment_text(input.comment_text.as_deref()).map_err(AppError::BadRequest)?;
    validate_scene_number(input.scene).map_err(AppError::BadRequest)?;

    let create = CreateComment {
        client_slug: input.client.unwrap_or_default(),
        project_slug: input.project.unwrap_or_default(),
        scene_number: input.scene,
        author_name: input.author_name.unwrap_or_default(),
        author_email: input.author_email,
        comment_text: input.comment_text.unwrap_or_default(),
    };

    let receipt = CommentRepo::create(&state.pool, &create).await?;

    tracing::info!(
        comment_id = receipt.id,
        client = %create.client_slug,
        project = %create.project_slug,
        scene = ?create.scene_number,
        "Comment submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentWriteResponse {
            success: true,
            comment: receipt,
        }),
    ))
}
