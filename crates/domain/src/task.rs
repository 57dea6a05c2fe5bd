//! # タスクエンティティ
//!
//! タスクは一意な整数 ID と説明文を持つ永続レコード。
//! ID はストア（PostgreSQL の SERIAL）が採番し、採番後は不変。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// タスク ID
///
/// ストアが採番する整数。採番後は不変。
/// JSON 上は素の整数として表現される（`#[serde(transparent)]`）。
#[derive(
   Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
   pub fn new(value: i32) -> Self {
      Self(value)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

/// タスク
///
/// JSON 形状: `{"id": <integer>, "description": <string>}`
///
/// ## 不変条件
///
/// - `id` は永続化されたタスク間で一意
/// - `description` は非 null（長さの制約はアプリケーションでは課さない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
   pub id:          TaskId,
   pub description: String,
}

impl Task {
   pub fn new(id: TaskId, description: impl Into<String>) -> Self {
      Self {
         id,
         description: description.into(),
      }
   }
}
