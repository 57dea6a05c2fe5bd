//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskboard-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicI32, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use taskboard_domain::task::{Task, TaskId};

use crate::{error::InfraError, repository::TaskRepository};

/// インメモリ実装の TaskRepository
///
/// id は 1 から単調増加で採番し、削除後も再利用しない（SERIAL と同じ挙動）。
/// `op_count` で操作回数を観測できるため、「認証失敗時にストアへ
/// 到達しないこと」の検証に使用する。
#[derive(Clone)]
pub struct MockTaskRepository {
   tasks:   Arc<Mutex<Vec<Task>>>,
   next_id: Arc<AtomicI32>,
   ops:     Arc<AtomicUsize>,
}

impl Default for MockTaskRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockTaskRepository {
   pub fn new() -> Self {
      Self {
         tasks:   Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(AtomicI32::new(1)),
         ops:     Arc::new(AtomicUsize::new(0)),
      }
   }

   /// これまでに実行されたリポジトリ操作の回数
   pub fn op_count(&self) -> usize {
      self.ops.load(Ordering::SeqCst)
   }

   fn record_op(&self) {
      self.ops.fetch_add(1, Ordering::SeqCst);
   }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
   async fn list(&self) -> Result<Vec<Task>, InfraError> {
      self.record_op();
      let mut tasks = self.tasks.lock().unwrap().clone();
      tasks.sort_by_key(|t| t.id);
      Ok(tasks)
   }

   async fn insert(&self, description: &str) -> Result<Task, InfraError> {
      self.record_op();
      let id = TaskId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
      let task = Task::new(id, description);
      self.tasks.lock().unwrap().push(task.clone());
      Ok(task)
   }

   async fn update(&self, task: &Task) -> Result<(), InfraError> {
      self.record_op();
      let mut tasks = self.tasks.lock().unwrap();
      if let Some(pos) = tasks.iter().position(|t| t.id == task.id) {
         tasks[pos] = task.clone();
      }
      // 存在しない id への更新は no-op（PostgreSQL 実装と同じ寛容な挙動）
      Ok(())
   }

   async fn delete(&self, id: TaskId) -> Result<(), InfraError> {
      self.record_op();
      self.tasks.lock().unwrap().retain(|t| t.id != id);
      Ok(())
   }
}
