/**
 * Server Configuration
 *
 * Environment-driven configuration: the task store connection and the
 * session secret.
 *
 * # Error Handling
 *
 * Configuration problems are logged but never prevent startup. Without a
 * reachable database the server falls back to the in-memory store, so the
 * board still works locally (state is lost on restart).
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::store::{MemoryTaskStore, PgTaskStore, TaskStore};

/// Load the task store
///
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// Falls back to [`MemoryTaskStore`] when the variable is unset or the
/// connection fails.
pub async fn load_store() -> Arc<dyn TaskStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory task store.");
            return Arc::new(MemoryTaskStore::new());
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory task store.");
            return Arc::new(MemoryTaskStore::new());
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            // Migrations may have already been applied out of band.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Arc::new(PgTaskStore::new(pool))
}

/// Read the shared secret the session cookies are signed with
pub fn load_session_secret() -> String {
    std::env::var("SESSION_SECRET").unwrap_or_else(|err| {
        tracing::warn!("Missing SESSION_SECRET ({}); using the development default", err);
        "dev-secret-change-in-production".to_string()
    })
}
