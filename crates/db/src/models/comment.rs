//! Storyboard comment model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyfeed_core::types::{DbId, Timestamp};

/// A row from the `storyboard_comments` table.
///
/// Identity and content fields are immutable after insert; only `status`,
/// `team_response`, and `resolved_at` change, and only through moderation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub client_slug: String,
    pub project_slug: String,
    pub scene_number: Option<i32>,
    pub author_name: String,
    pub author_email: Option<String>,
    pub comment_text: String,
    pub status: String,
    pub team_response: Option<String>,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

/// DTO for creating a new comment. Fields are validated by the caller
/// before this reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub client_slug: String,
    pub project_slug: String,
    pub scene_number: Option<i32>,
    pub author_name: String,
    pub author_email: Option<String>,
    pub comment_text: String,
}

/// The server-assigned fields returned from an insert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentReceipt {
    pub id: DbId,
    pub created_at: Timestamp,
}
