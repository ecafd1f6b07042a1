//! Repository for the `storyboard_comments` table and its moderation view.

use sqlx::PgPool;
use storyfeed_core::comments::ADMIN_LIST_CAP;
use storyfeed_core::types::DbId;

use crate::models::comment::{Comment, CommentReceipt, CreateComment};

/// Column list for storyboard_comments queries.
const COLUMNS: &str = "id, client_slug, project_slug, scene_number, author_name, \
    author_email, comment_text, status, team_response, created_at, resolved_at";

/// Provides comment persistence for the public and admin APIs.
///
/// Comments are never deleted; moderation only changes `status`,
/// `team_response`, and `resolved_at`.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment with status `pending`, returning the
    /// server-assigned id and creation timestamp.
    pub async fn create(
        pool: &PgPool,
        input: &CreateComment,
    ) -> Result<CommentReceipt, sqlx::Error> {
        sqlx::query_as::<_, CommentReceipt>(
            "INSERT INTO storyboard_comments
                (client_slug, project_slug, scene_number, author_name, author_email, comment_text)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, created_at",
        )
        .bind(&input.client_slug)
        .bind(&input.project_slug)
        .bind(input.scene_number)
        .bind(&input.author_name)
        .bind(&input.author_email)
        .bind(&input.comment_text)
        .fetch_one(pool)
        .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storyboard_comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List comments for one storyboard, optionally narrowed to one scene.
    ///
    /// The unfiltered listing orders the general thread first
    /// (`scene_number NULLS FIRST`), then scenes ascending, newest comment
    /// first within each thread. Ties on `created_at` break by id.
    pub async fn list_by_project(
        pool: &PgPool,
        client_slug: &str,
        project_slug: &str,
        scene_number: Option<i32>,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        if let Some(scene) = scene_number {
            let query = format!(
                "SELECT {COLUMNS} FROM storyboard_comments
                 WHERE client_slug = $1 AND project_slug = $2 AND scene_number = $3
                 ORDER BY created_at DESC, id DESC"
            );
            sqlx::query_as::<_, Comment>(&query)
                .bind(client_slug)
                .bind(project_slug)
                .bind(scene)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM storyboard_comments
                 WHERE client_slug = $1 AND project_slug = $2
                 ORDER BY scene_number ASC NULLS FIRST, created_at DESC, id DESC"
            );
            sqlx::query_as::<_, Comment>(&query)
                .bind(client_slug)
                .bind(project_slug)
                .fetch_all(pool)
                .await
        }
    }

    /// List comments across all storyboards from the moderation view,
    /// most-recent-first.
    ///
    /// One explicit query per filter combination. Only the unfiltered
    /// listing is capped; a narrowed listing returns every match.
    pub async fn list_all(
        pool: &PgPool,
        status: Option<&str>,
        client_slug: Option<&str>,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        match (status, client_slug) {
            (Some(status), Some(client)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM storyboard_comments_view
                     WHERE status = $1 AND client_slug = $2"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(status)
                    .bind(client)
                    .fetch_all(pool)
                    .await
            }
            (Some(status), None) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM storyboard_comments_view WHERE status = $1"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            (None, Some(client)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM storyboard_comments_view WHERE client_slug = $1"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(client)
                    .fetch_all(pool)
                    .await
            }
            (None, None) => {
                let query =
                    format!("SELECT {COLUMNS} FROM storyboard_comments_view LIMIT $1");
                sqlx::query_as::<_, Comment>(&query)
                    .bind(ADMIN_LIST_CAP)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Apply a moderation update: set status, attach a team response, or
    /// both. Returns `None` when no row matches the id.
    ///
    /// Writing `status = 'resolved'` stamps `resolved_at = NOW()` in the
    /// same statement; any other status write leaves `resolved_at` as-is,
    /// so reopening a comment keeps its old resolution time.
    ///
    /// Callers must supply at least one field; the repository itself only
    /// branches over the three present-field combinations.
    pub async fn update_moderation(
        pool: &PgPool,
        id: DbId,
        status: Option<&str>,
        team_response: Option<&str>,
    ) -> Result<Option<Comment>, sqlx::Error> {
        match (status, team_response) {
            (Some(status), Some(response)) => {
                let query = format!(
                    "UPDATE storyboard_comments
                     SET status = $2, team_response = $3,
                         resolved_at = CASE WHEN $2 = 'resolved' THEN NOW() ELSE resolved_at END
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(id)
                    .bind(status)
                    .bind(response)
                    .fetch_optional(pool)
                    .await
            }
            (Some(status), None) => {
                let query = format!(
                    "UPDATE storyboard_comments
                     SET status = $2,
                         resolved_at = CASE WHEN $2 = 'resolved' THEN NOW() ELSE resolved_at END
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(id)
                    .bind(status)
                    .fetch_optional(pool)
                    .await
            }
            (None, Some(response)) => {
                let query = format!(
                    "UPDATE storyboard_comments
                     SET team_response = $2
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Comment>(&query)
                    .bind(id)
                    .bind(response)
                    .fetch_optional(pool)
                    .await
            }
            (None, None) => Ok(None),
        }
    }
}
