/**
 * Board View
 *
 * The stateful component behind the board page. It holds the in-memory
 * task list, the text input, and an optional edit target, and dispatches
 * the four mutations against the task store, patching local state in each
 * success branch (optimistic reconciliation, matching the original page's
 * behavior).
 *
 * # States
 *
 * - `idle` - no edit target; a submit inserts a new task
 * - `editing` - an existing task is targeted; its text is prefilled into
 *   the input and a submit updates only that task's text
 *
 * Entering edit mode is guarded by the supporter flag. Submitting an empty
 * input is rejected before any remote call. When the store rejects a
 * mutation the error is returned to the caller and local state is left
 * unchanged — the original logged and swallowed these rejections; the
 * explicit result is a deliberate redesign so the caller can tell the user.
 *
 * Overlapping mutations race independently against the store; there is no
 * ordering guarantee between them beyond the store's own.
 */

use std::sync::Arc;

use chrono::Utc;

use crate::board::dates::format_created;
use crate::board::task::{BoardUser, Task};
use crate::error::BoardError;
use crate::store::{TaskFields, TaskPatch, TaskStore};

/// Stateful board component
pub struct BoardView {
    store: Arc<dyn TaskStore>,
    user: BoardUser,
    tasks: Vec<Task>,
    input: String,
    edit_target: Option<Task>,
}

impl BoardView {
    /// Create a view over the loader's initial task list
    pub fn new(store: Arc<dyn TaskStore>, user: BoardUser, tasks: Vec<Task>) -> Self {
        Self {
            store,
            user,
            tasks,
            input: String::new(),
            edit_target: None,
        }
    }

    /// Current task list
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The task currently targeted for editing, if any
    pub fn edit_target(&self) -> Option<&Task> {
        self.edit_target.as_ref()
    }

    /// Replace the input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the input: insert a new task, or update the edit target
    ///
    /// In `idle` state this inserts a new document owned by the view's user
    /// and appends it locally with the client-known timestamp and formatted
    /// date. In `editing` state it updates only the target's text and
    /// patches the matching local entry by id. Either way the input is
    /// cleared on success.
    ///
    /// Rapid duplicate submits are not deduplicated; each one that the
    /// store accepts appends.
    pub async fn submit(&mut self) -> Result<(), BoardError> {
        if self.input.is_empty() {
            return Err(BoardError::EmptyInput);
        }

        if let Some(target) = self.edit_target.clone() {
            self.store
                .update(&target.id, TaskPatch { task: self.input.clone() })
                .await
                .map_err(|e| {
                    tracing::error!("Failed to update task {}: {}", target.id, e);
                    e
                })?;

            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == target.id) {
                task.task = self.input.clone();
            }
            self.edit_target = None;
            self.input.clear();
            return Ok(());
        }

        let created = Utc::now();
        let fields = TaskFields {
            created,
            task: self.input.clone(),
            user_id: self.user.id.clone(),
            name: self.user.name.clone(),
        };

        let id = self.store.insert(fields).await.map_err(|e| {
            tracing::error!("Failed to add task: {}", e);
            e
        })?;

        self.tasks.push(Task {
            id,
            created,
            created_formatted: Some(format_created(&created)),
            task: self.input.clone(),
            user_id: self.user.id.clone(),
            name: self.user.name.clone(),
        });
        self.input.clear();
        Ok(())
    }

    /// Target a task for editing, prefilling the input with its text
    ///
    /// Only reachable for supporters.
    pub fn start_edit(&mut self, task_id: &str) -> Result<(), BoardError> {
        if !self.user.vip {
            return Err(BoardError::SupporterRequired);
        }

        let task = self
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or_else(|| BoardError::UnknownTask { id: task_id.to_string() })?;

        self.input = task.task.clone();
        self.edit_target = Some(task);
        Ok(())
    }

    /// Leave edit mode, clearing the target and the input; no remote call
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.input.clear();
    }

    /// Delete a task remotely, filtering it out of local state on success
    pub async fn delete(&mut self, task_id: &str) -> Result<(), BoardError> {
        self.store.delete(task_id).await.map_err(|e| {
            tracing::error!("Failed to delete task {}: {}", task_id, e);
            e
        })?;

        self.tasks.retain(|t| t.id != task_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTaskStore;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn user(vip: bool) -> BoardUser {
        BoardUser {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            vip,
            last_donate: None,
        }
    }

    fn seed_task(id: &str, text: &str) -> Task {
        Task {
            id: id.to_string(),
            created: Utc.with_ymd_and_hms(2024, 8, 17, 9, 0, 0).unwrap(),
            created_formatted: Some("17 August 2024".to_string()),
            task: text.to_string(),
            user_id: "u1".to_string(),
            name: "Ana".to_string(),
        }
    }

    fn view_with(store: Arc<MemoryTaskStore>, vip: bool, tasks: Vec<Task>) -> BoardView {
        BoardView::new(store, user(vip), tasks)
    }

    #[tokio::test]
    async fn test_add_appends_task_with_session_owner() {
        let store = Arc::new(MemoryTaskStore::new());
        let mut view = view_with(store.clone(), false, Vec::new());

        view.set_input("Walk dog");
        view.submit().await.unwrap();

        assert_eq!(view.tasks().len(), 1);
        assert_eq!(view.tasks()[0].task, "Walk dog");
        assert_eq!(view.tasks()[0].user_id, "u1");
        assert_eq!(view.tasks()[0].name, "Ana");
        assert!(view.tasks()[0].created_formatted.is_some());
        assert_eq!(view.input(), "");

        // The remote side holds the same document.
        let remote = store.list_for_owner("u1").await.unwrap();
        assert_eq!(remote.len(), 1);
        assert_eq!(remote[0].id, view.tasks()[0].id);
    }

    #[tokio::test]
    async fn test_empty_submit_is_rejected_without_remote_call() {
        let store = Arc::new(MemoryTaskStore::new());
        store.set_fail_writes(true); // any remote call would error loudly
        let mut view = view_with(store.clone(), false, Vec::new());

        let result = view.submit().await;
        assert!(matches!(result, Err(BoardError::EmptyInput)));
        assert!(view.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_add_leaves_state_unchanged() {
        let store = Arc::new(MemoryTaskStore::new());
        store.set_fail_writes(true);
        let mut view = view_with(store.clone(), false, Vec::new());

        view.set_input("Walk dog");
        let result = view.submit().await;

        assert!(result.is_err());
        assert!(view.tasks().is_empty());
        assert_eq!(view.input(), "Walk dog");
    }

    #[tokio::test]
    async fn test_edit_changes_only_target_text() {
        let store = Arc::new(MemoryTaskStore::with_tasks(vec![
            seed_task("1", "Buy milk"),
            seed_task("2", "Walk dog"),
        ]));
        let mut view = view_with(
            store.clone(),
            true,
            vec![seed_task("1", "Buy milk"), seed_task("2", "Walk dog")],
        );

        view.start_edit("1").unwrap();
        assert_eq!(view.input(), "Buy milk");

        view.set_input("Buy oat milk");
        view.submit().await.unwrap();

        assert_eq!(view.tasks()[0].task, "Buy oat milk");
        assert_eq!(view.tasks()[0].id, "1");
        assert_eq!(view.tasks()[0].name, "Ana");
        assert_eq!(view.tasks()[1].task, "Walk dog");
        assert!(view.edit_target().is_none());
        assert_eq!(view.input(), "");
    }

    #[tokio::test]
    async fn test_rejected_edit_keeps_text_target_and_input() {
        let store = Arc::new(MemoryTaskStore::with_tasks(vec![seed_task("1", "Buy milk")]));
        let mut view = view_with(store.clone(), true, vec![seed_task("1", "Buy milk")]);

        view.start_edit("1").unwrap();
        view.set_input("Buy oat milk");
        store.set_fail_writes(true);

        let result = view.submit().await;

        assert!(result.is_err());
        assert_eq!(view.tasks()[0].task, "Buy milk");
        assert_eq!(view.edit_target().map(|t| t.id.as_str()), Some("1"));
        assert_eq!(view.input(), "Buy oat milk");
    }

    #[tokio::test]
    async fn test_edit_requires_supporter_flag() {
        let store = Arc::new(MemoryTaskStore::new());
        let mut view = view_with(store, false, vec![seed_task("1", "Buy milk")]);

        let result = view.start_edit("1");
        assert!(matches!(result, Err(BoardError::SupporterRequired)));
        assert!(view.edit_target().is_none());
        assert_eq!(view.input(), "");
    }

    #[tokio::test]
    async fn test_cancel_edit_clears_without_remote_call() {
        let store = Arc::new(MemoryTaskStore::new());
        store.set_fail_writes(true);
        let mut view = view_with(store, true, vec![seed_task("1", "Buy milk")]);

        view.start_edit("1").unwrap();
        view.cancel_edit();

        assert!(view.edit_target().is_none());
        assert_eq!(view.input(), "");
        assert_eq!(view.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_matching_entry() {
        let store = Arc::new(MemoryTaskStore::with_tasks(vec![
            seed_task("1", "Buy milk"),
            seed_task("2", "Walk dog"),
        ]));
        let mut view = view_with(
            store,
            false,
            vec![seed_task("1", "Buy milk"), seed_task("2", "Walk dog")],
        );

        view.delete("1").await.unwrap();

        assert_eq!(view.tasks().len(), 1);
        assert_eq!(view.tasks()[0].id, "2");
    }

    #[tokio::test]
    async fn test_rejected_delete_leaves_list_unchanged() {
        let store = Arc::new(MemoryTaskStore::with_tasks(vec![seed_task("1", "Buy milk")]));
        store.set_fail_writes(true);
        let mut view = view_with(store, false, vec![seed_task("1", "Buy milk")]);

        let result = view.delete("1").await;

        assert!(result.is_err());
        assert_eq!(view.tasks().len(), 1);
    }

    // The end-to-end scenario: seed one task, add, edit, delete.
    #[tokio::test]
    async fn test_board_scenario() {
        let seed = seed_task("1", "Buy milk");
        let store = Arc::new(MemoryTaskStore::with_tasks(vec![seed.clone()]));
        let mut view = view_with(store, true, vec![seed]);

        view.set_input("Walk dog");
        view.submit().await.unwrap();
        assert_eq!(view.tasks().len(), 2);
        assert_eq!(view.tasks()[1].task, "Walk dog");

        view.start_edit("1").unwrap();
        view.set_input("Buy oat milk");
        view.submit().await.unwrap();
        assert_eq!(view.tasks()[0].task, "Buy oat milk");
        assert_eq!(view.tasks()[0].id, "1");

        view.delete("1").await.unwrap();
        assert_eq!(view.tasks().len(), 1);
        assert_eq!(view.tasks()[0].task, "Walk dog");
    }
}
