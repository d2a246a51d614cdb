/**
 * Application State
 *
 * The central state container for the Axum application. The document store
 * and the session provider are explicit trait-object dependencies rather
 * than module-level singletons, so tests substitute fakes by constructing
 * a different `AppState`.
 *
 * `FromRef` implementations let handlers extract just the piece they need
 * instead of the whole state.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::session::SessionProvider;
use crate::store::TaskStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote task collection
    pub store: Arc<dyn TaskStore>,

    /// Resolver for the request's session cookie
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    /// Assemble the state from its dependencies
    pub fn new(store: Arc<dyn TaskStore>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self { store, sessions }
    }
}

/// Allow handlers to extract the task store directly
impl FromRef<AppState> for Arc<dyn TaskStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allow handlers to extract the session provider directly
impl FromRef<AppState> for Arc<dyn SessionProvider> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
