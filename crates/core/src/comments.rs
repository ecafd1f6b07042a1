//! Comment status constants and validation functions.
//!
//! A comment belongs to a thread keyed by (client_slug, project_slug,
//! scene_number), where a missing scene number means the whole-project
//! "general" thread. Validation here is shared by the public submission
//! endpoint and the admin moderation endpoint.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of comment text in characters.
pub const MAX_COMMENT_TEXT_LENGTH: usize = 10_000;

/// Maximum length of an author name.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 200;

/// Row cap for the unfiltered admin moderation listing.
pub const ADMIN_LIST_CAP: i64 = 100;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// A comment awaiting team triage. Every comment starts here.
pub const STATUS_PENDING: &str = "pending";

/// A comment the team considers addressed. Latched with `resolved_at`.
pub const STATUS_RESOLVED: &str = "resolved";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_RESOLVED];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate a required slug field (client or project identifier).
pub fn validate_slug(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(format!("{field} is required")),
    }
}

/// Validate an author name: required, non-empty, within the length limit.
pub fn validate_author_name(name: Option<&str>) -> Result<(), String> {
    let name = name.unwrap_or("");
    if name.trim().is_empty() {
        return Err("author_name is required".to_string());
    }
    if name.len() > MAX_AUTHOR_NAME_LENGTH {
        return Err(format!(
            "author_name exceeds maximum length of {MAX_AUTHOR_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate comment text: required, non-empty, within the length limit.
pub fn validate_comment_text(text: Option<&str>) -> Result<(), String> {
    let text = text.unwrap_or("");
    if text.trim().is_empty() {
        return Err("comment_text is required".to_string());
    }
    if text.len() > MAX_COMMENT_TEXT_LENGTH {
        return Err(format!(
            "comment_text exceeds maximum length of {MAX_COMMENT_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional scene number. Scene numbering starts at 1; a missing
/// value addresses the whole-project general thread.
pub fn validate_scene_number(scene: Option<i32>) -> Result<(), String> {
    match scene {
        Some(n) if n < 1 => Err("scene must be a positive scene number".to_string()),
        _ => Ok(()),
    }
}

/// Validate the shape of a moderation update: at least one of status or
/// team_response must be present, and a present status must be valid.
pub fn validate_moderation_update(
    status: Option<&str>,
    team_response: Option<&str>,
) -> Result<(), String> {
    if status.is_none() && team_response.is_none() {
        return Err("status or team_response required".to_string());
    }
    if let Some(s) = status {
        validate_status(s)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
