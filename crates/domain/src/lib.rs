//! # Taskboard ドメイン層
//!
//! タスクと認証情報のドメイン型を提供する。
//!
//! ## 設計方針
//!
//! - I/O を含まない純粋な型のみを配置
//! - 永続化やシリアライゼーションの詳細はインフラ層・アプリ層に委譲

pub mod credential;
pub mod task;

pub use credential::{Credential, CredentialSet};
pub use task::{Task, TaskId};
