//! Shared-secret authentication extractor for the admin endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use storyfeed_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured admin secret.
///
/// Use this as an extractor parameter in any handler that requires
/// moderation access. Rejection happens before the handler body runs,
/// so no store access is possible without the key:
///
/// ```ignore
/// async fn my_handler(_key: AdminKey) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminKey;

impl FromRequestParts<AppState> for AdminKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get("x-admin-key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing X-Admin-Key header".into(),
                ))
            })?;

        if key != state.config.admin_key {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin key".into(),
            )));
        }

        Ok(AdminKey)
    }
}
