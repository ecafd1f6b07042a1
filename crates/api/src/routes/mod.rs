pub mod health;

use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET   /comments          -> list_comments (?client, project, scene)
/// POST  /comments          -> submit_comment
///
/// GET   /admin/comments    -> admin list_comments (?status, client)
/// PATCH /admin/comments    -> admin update_comment
/// ```
///
/// CORS pre-flight is answered by the CORS layer; any other method on
/// these routes gets the JSON 405 envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            get(handlers::comments::list_comments)
                .post(handlers::comments::submit_comment)
                .fallback(method_not_allowed),
        )
        .route(
            "/admin/comments",
            get(handlers::admin_comments::list_comments)
                .patch(handlers::admin_comments::update_comment)
                .fallback(method_not_allowed),
        )
}

/// Shared 405 handler for unsupported methods on known routes.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
