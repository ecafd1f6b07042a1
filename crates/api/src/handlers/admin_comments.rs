//! Handlers for the admin moderation endpoints.
//!
//! Every handler takes the [`AdminKey`] extractor, so a missing or wrong
//! `X-Admin-Key` header is rejected with 401 before any store access.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use storyfeed_core::comments::{validate_moderation_update, validate_status};
use storyfeed_core::error::CoreError;
use storyfeed_core::types::DbId;
use storyfeed_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin_key::AdminKey;
use crate::response::{CommentListResponse, CommentWriteResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for the cross-storyboard moderation listing.
#[derive(Debug, serde::Deserialize)]
pub struct AdminListParams {
    pub status: Option<String>,
    pub client: Option<String>,
}

/// Request body for a moderation update.
#[derive(Debug, serde::Deserialize)]
pub struct UpdateCommentRequest {
    pub id: Option<DbId>,
    pub status: Option<String>,
    pub team_response: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/comments?status=&client=
///
/// List comments across all storyboards from the moderation view,
/// most-recent-first. Both filters are optional and combine freely;
/// the unfiltered listing is capped at 100 rows.
pub async fn list_comments(
    _key: AdminKey,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        validate_status(status).map_err(AppError::BadRequest)?;
    }

    let comments = CommentRepo::list_all(
        &state.pool,
        params.status.as_deref(),
        params.client.as_deref(),
    )
    .await?;

    Ok(Json(CommentListResponse { comments }))
}

/// PATCH /admin/comments
///
/// Transition a comment's status, attach a team response, or both.
/// Resolving stamps `resolved_at` atomically with the status write;
/// moving back to pending leaves the old timestamp in place.
pub async fn update_comment(
    _key: AdminKey,
    State(state): State<AppState>,
    Json(input): Json<UpdateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Comment ID is required".to_string()))?;

    validate_moderation_update(input.status.as_deref(), input.team_response.as_deref())
        .map_err(AppError::BadRequest)?;

    let comment = CommentRepo::update_moderation(
        &state.pool,
        id,
        input.status.as_deref(),
        input.team_response.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Comment",
        id,
    }))?;

    tracing::info!(
        comment_id = id,
        status = %comment.status,
        has_response = comment.team_response.is_some(),
        "Comment moderated"
    );

    Ok(Json(CommentWriteResponse {
        success: true,
        comment,
    }))
}
