//! # タスク API ハンドラ
//!
//! タスクの CRUD エンドポイントを実装する。
//!
//! ## 設計方針
//!
//! - **寛容なデコード**: リクエスト JSON の欠落フィールドは既定値で補う
//!   （`{}` での作成は空の説明文のタスクになる。元サービスと同じ挙動）
//! - **更新・削除は存在チェックなし**: 対象 id がなくても成功として扱う
//! - **成功レスポンスは素の JSON**: エンベロープは被せない

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Query, State,
      rejection::{JsonRejection, QueryRejection},
   },
   http::StatusCode,
};
use serde::{Deserialize, Serialize};
use taskboard_domain::task::{Task, TaskId};
use taskboard_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスクハンドラーの State
pub struct TaskState<R> {
   pub repository: R,
}

/// タスク DTO
///
/// JSON 形状: `{"id": <integer>, "description": <string>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDto {
   pub id:          i32,
   pub description: String,
}

impl From<Task> for TaskDto {
   fn from(task: Task) -> Self {
      Self {
         id:          task.id.as_i32(),
         description: task.description,
      }
   }
}

/// タスク作成リクエスト
///
/// `id` フィールドが含まれていても無視する（ストアが採番する）。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   #[serde(default)]
   pub description: String,
}

/// タスク更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
   #[serde(default)]
   pub id:          i32,
   #[serde(default)]
   pub description: String,
}

/// タスク削除クエリパラメータ
///
/// `id` は文字列として受け取り、ハンドラ内で整数へ変換する。
/// 変換失敗は 400 Bad Request。
#[derive(Debug, Deserialize)]
pub struct DeleteTaskQuery {
   pub id: String,
}

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /list
///
/// 全タスクを id 昇順の JSON 配列で返す。タスクがなければ空配列 `[]`。
pub async fn list_tasks<R>(
   State(state): State<Arc<TaskState<R>>>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
   R: TaskRepository,
{
   let tasks = state.repository.list().await?;

   Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /task
///
/// ストアが採番した id を含むタスクを返す。不正な JSON は 400。
pub async fn create_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskDto>, ApiError>
where
   R: TaskRepository,
{
   let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

   let task = state.repository.insert(&request.description).await?;

   Ok(Json(task.into()))
}

/// タスクの説明文を更新する
///
/// ## エンドポイント
/// PUT /task
///
/// 対象 id が存在しなくてもエラーにせず、送信されたタスクを
/// そのままエコーして返す。不正な JSON は 400。
pub async fn update_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskDto>, ApiError>
where
   R: TaskRepository,
{
   let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

   let task = Task::new(TaskId::new(request.id), request.description);
   state.repository.update(&task).await?;

   Ok(Json(task.into()))
}

/// タスクを削除する
///
/// ## エンドポイント
/// DELETE /task?id=N
///
/// 対象 id が存在しなくても 204 No Content（冪等）。
/// `id` の欠落・整数でない値は 400。
pub async fn delete_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   query: Result<Query<DeleteTaskQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError>
where
   R: TaskRepository,
{
   let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
   let id: i32 = query
      .id
      .parse()
      .map_err(|_| ApiError::BadRequest(format!("id は整数である必要があります: {:?}", query.id)))?;

   state.repository.delete(TaskId::new(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}
