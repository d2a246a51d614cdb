/**
 * PostgreSQL Task Store
 *
 * Production implementation of `TaskStore` backed by a PostgreSQL
 * connection pool. Document ids are store-generated v4 UUIDs, exposed to
 * the rest of the application as opaque strings.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::board::task::Task;
use crate::store::{StoreError, TaskFields, TaskPatch, TaskStore};

/// Task store backed by the `tasks` table
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Parse an opaque document id back into the UUID the table stores
    fn parse_id(id: &str) -> Result<Uuid, StoreError> {
        Uuid::parse_str(id).map_err(|_| StoreError::InvalidId { id: id.to_string() })
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn insert(&self, fields: TaskFields) -> Result<String, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO tasks (id, user_id, name, task, created)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&fields.user_id)
        .bind(&fields.name)
        .bind(&fields.task)
        .bind(fields.created)
        .execute(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<(), StoreError> {
        let uuid = Self::parse_id(id)?;

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET task = $1
            WHERE id = $2
            "#,
        )
        .bind(&patch.task)
        .bind(uuid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let uuid = Self::parse_id(id)?;

        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(uuid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        Ok(())
    }

    async fn list_for_owner(&self, user_id: &str) -> Result<Vec<Task>, StoreError> {
        #[derive(sqlx::FromRow)]
        struct TaskRow {
            id: Uuid,
            user_id: String,
            name: String,
            task: String,
            created: DateTime<Utc>,
        }

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, user_id, name, task, created
            FROM tasks
            WHERE user_id = $1
            ORDER BY created ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let tasks = rows
            .into_iter()
            .map(|row| Task {
                id: row.id.to_string(),
                created: row.created,
                created_formatted: None,
                task: row.task,
                user_id: row.user_id,
                name: row.name,
            })
            .collect();

        Ok(tasks)
    }
}
