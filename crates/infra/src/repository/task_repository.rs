//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **一覧は id 昇順**: 元サービスは順序未指定だったが、決定性のため
//!   明示的に `ORDER BY id ASC` を付与する（挙動変更として記録済み）
//! - **更新・削除は寛容**: 対象 id が存在しなくてもエラーにしない
//!   （rows-affected を検査しない）

use async_trait::async_trait;
use sqlx::PgPool;
use taskboard_domain::task::{Task, TaskId};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの永続化操作を定義する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// 全タスクを id 昇順で取得する
   async fn list(&self) -> Result<Vec<Task>, InfraError>;

   /// 新規タスクを挿入し、ストアが採番したタスクを返す
   async fn insert(&self, description: &str) -> Result<Task, InfraError>;

   /// タスクの説明文を更新する
   ///
   /// 対象 id が存在しない場合も成功として扱う（no-op）。
   async fn update(&self, task: &Task) -> Result<(), InfraError>;

   /// タスクを削除する
   ///
   /// 対象 id が存在しない場合も成功として扱う（冪等）。
   async fn delete(&self, id: TaskId) -> Result<(), InfraError>;
}

/// DB の tasks テーブルの行を表す中間構造体
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
   id:          i32,
   description: String,
}

impl From<TaskRow> for Task {
   fn from(row: TaskRow) -> Self {
      Task::new(TaskId::new(row.id), row.description)
   }
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
   pool: PgPool,
}

impl PostgresTaskRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
   async fn list(&self) -> Result<Vec<Task>, InfraError> {
      let rows = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, description
            FROM tasks
            ORDER BY id ASC
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Task::from).collect())
   }

   async fn insert(&self, description: &str) -> Result<Task, InfraError> {
      let row = sqlx::query_as::<_, TaskRow>(
         r#"
            INSERT INTO tasks (description)
            VALUES ($1)
            RETURNING id, description
            "#,
      )
      .bind(description)
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into())
   }

   async fn update(&self, task: &Task) -> Result<(), InfraError> {
      // rows-affected は検査しない。存在しない id への更新は no-op。
      sqlx::query(
         r#"
            UPDATE tasks
            SET description = $1
            WHERE id = $2
            "#,
      )
      .bind(&task.description)
      .bind(task.id.as_i32())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
      )
      .bind(id.as_i32())
      .execute(&self.pool)
      .await?;

      Ok(())
   }
}
