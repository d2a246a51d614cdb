/**
 * Router Configuration
 *
 * Combines the page routes, the task API, and static file serving into a
 * single Axum router.
 *
 * # Routes
 *
 * ## Pages
 * - `GET /` - landing page (redirect target for unauthenticated requests)
 * - `GET /board` - the task board, server-rendered
 *
 * ## Task API (session cookie required)
 * - `GET /api/tasks` - list the caller's tasks
 * - `POST /api/tasks` - add a task
 * - `PATCH /api/tasks/{id}` - edit a task's text (supporters only)
 * - `DELETE /api/tasks/{id}` - delete a task
 *
 * ## Static Files
 * - `/static/` - assets served from the public directory
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::routes::api::{add_task, delete_task, list_tasks, update_task};
use crate::routes::page::{board_page, landing_page};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", axum::routing::get(landing_page))
        .route("/board", axum::routing::get(board_page))
        .route(
            "/api/tasks",
            axum::routing::get(list_tasks).post(add_task),
        )
        .route(
            "/api/tasks/{id}",
            axum::routing::patch(update_task).delete(delete_task),
        );

    // Static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
