//! # リポジトリ
//!
//! 永続化操作を trait として抽象化し、PostgreSQL 実装を提供する。
//! テストでは `mock` モジュールのインメモリ実装に差し替える。

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
