//! # Taskboard インフラ層
//!
//! PostgreSQL への接続管理とタスクの永続化を提供する。
//!
//! ## 構成
//!
//! - [`db`]: 接続プールの作成とスキーマ初期化
//! - [`repository`]: [`repository::TaskRepository`] trait と PostgreSQL 実装
//! - [`mock`]: テスト用インメモリ実装（`test-utils` feature 有効時のみ）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::InfraError;
