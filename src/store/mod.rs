/**
 * Task Document Store
 *
 * This module defines the client interface to the remote collection of task
 * documents. The board never talks to a database directly; everything goes
 * through the `TaskStore` trait so the production PostgreSQL client and the
 * in-memory fake used by tests are interchangeable.
 *
 * # Operations
 *
 * The store supports exactly four operations:
 * - `insert` - insert a document, returning a store-generated id
 * - `update` - point update of a document's text
 * - `delete` - point delete of a document
 * - `list_for_owner` - equality-filtered listing on the owner id
 *
 * No transactions, no batch operations.
 */

pub mod memory;
pub mod postgres;

pub use memory::MemoryTaskStore;
pub use postgres::PgTaskStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::board::task::Task;

/// Errors produced by the document store
///
/// The original implementation swallowed store rejections after logging them;
/// here every operation returns an explicit result so callers can decide how
/// to reconcile local state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document id does not exist in the collection
    #[error("task {id} not found")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// The document id is not in the format this store generates
    #[error("malformed task id: {id}")]
    InvalidId {
        /// The offending id
        id: String,
    },

    /// The store rejected the operation (connection loss, backend failure)
    #[error("store rejected the operation: {message}")]
    Rejected {
        /// Backend-provided failure detail
        message: String,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                id: String::new(),
            },
            other => StoreError::Rejected {
                message: other.to_string(),
            },
        }
    }
}

/// Fields written when inserting a new task document
///
/// Matches the document shape the original page wrote on add: creation
/// timestamp, text, owner id, and the denormalized owner display name.
#[derive(Debug, Clone)]
pub struct TaskFields {
    /// Creation timestamp, fixed at insert time
    pub created: DateTime<Utc>,
    /// Task text
    pub task: String,
    /// Owner identifier, immutable after insert
    pub user_id: String,
    /// Owner display name at creation time
    pub name: String,
}

/// Point-update payload
///
/// The text is the only mutable field of a task, so this is all an update
/// can carry.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    /// Replacement task text
    pub task: String,
}

/// Client interface to the remote task collection
///
/// Implementations: [`PgTaskStore`] (PostgreSQL via sqlx) and
/// [`MemoryTaskStore`] (in-process, for tests and database-less runs).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new document and return the generated id
    async fn insert(&self, fields: TaskFields) -> Result<String, StoreError>;

    /// Update the text of the document with the given id
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<(), StoreError>;

    /// Delete the document with the given id
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// List all documents whose owner id equals `user_id`, oldest first
    async fn list_for_owner(&self, user_id: &str) -> Result<Vec<Task>, StoreError>;
}
