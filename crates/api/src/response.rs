//! Shared response envelope types for API handlers.
//!
//! The wire contract wraps listings as `{ "comments": [...] }` and writes
//! as `{ "success": true, "comment": ... }`. Use these typed envelopes
//! instead of ad-hoc `serde_json::json!` to get compile-time type safety
//! and consistent serialization.

use serde::Serialize;
use storyfeed_db::models::comment::Comment;

/// Standard `{ "comments": [...] }` listing envelope.
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}

/// Standard `{ "success": true, "comment": T }` write envelope.
///
/// `T` is [`CommentReceipt`](storyfeed_db::models::comment::CommentReceipt)
/// for submissions and the full [`Comment`] for moderation updates.
#[derive(Debug, Serialize)]
pub struct CommentWriteResponse<T: Serialize> {
    pub success: bool,
    pub comment: T,
}
