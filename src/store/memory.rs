/**
 * In-Memory Task Store
 *
 * `TaskStore` implementation that keeps documents in a mutex-guarded vector.
 * Used by the test suite and as the fallback store when no `DATABASE_URL`
 * is configured, so the server can run without a database.
 *
 * Ids are generated the same way as the PostgreSQL store (v4 UUID strings)
 * and are never reused after deletion.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::board::task::Task;
use crate::store::{StoreError, TaskFields, TaskPatch, TaskStore};

/// In-process task store
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    // When set, every mutation is rejected. Lets tests exercise the
    // store-rejection path without a network.
    fail_writes: AtomicBool,
}

impl MemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given documents
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent mutation fail with `StoreError::Rejected`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected {
                message: "write failure injected by test".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, fields: TaskFields) -> Result<String, StoreError> {
        self.check_writable()?;

        let id = Uuid::new_v4().to_string();
        let mut tasks = self.tasks.lock().expect("task store lock poisoned");
        tasks.push(Task {
            id: id.clone(),
            created: fields.created,
            created_formatted: None,
            task: fields.task,
            user_id: fields.user_id,
            name: fields.name,
        });

        Ok(id)
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<(), StoreError> {
        self.check_writable()?;

        let mut tasks = self.tasks.lock().expect("task store lock poisoned");
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        task.task = patch.task;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_writable()?;

        let mut tasks = self.tasks.lock().expect("task store lock poisoned");
        let before = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    async fn list_for_owner(&self, user_id: &str) -> Result<Vec<Task>, StoreError> {
        let tasks = self.tasks.lock().expect("task store lock poisoned");
        Ok(tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }
}
