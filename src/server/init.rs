/**
 * Server Initialization
 *
 * Builds the Axum application: loads the store and session configuration,
 * assembles the application state, and configures the router.
 */

use std::sync::Arc;

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{load_session_secret, load_store};
use crate::server::state::AppState;
use crate::session::JwtSessionProvider;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Load the task store (PostgreSQL, or the in-memory fallback)
/// 2. Create the session provider from the configured secret
/// 3. Assemble the application state and the router
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing taskboard server");

    let store = load_store().await;
    let sessions = Arc::new(JwtSessionProvider::new(load_session_secret()));

    let app_state = AppState::new(store, sessions);

    tracing::info!("Router configured");
    create_router(app_state)
}
