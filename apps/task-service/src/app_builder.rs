//! # Task Service アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   middleware::from_fn_with_state,
   routing::{get, post},
};
use taskboard_domain::credential::CredentialSet;
use taskboard_infra::repository::TaskRepository;
use tower_http::trace::TraceLayer;

use crate::{
   handler::{TaskState, create_task, delete_task, health_check, index, list_tasks, update_task},
   middleware::{AuthState, require_basic_auth},
};

/// ルーターを構築する
///
/// タスク系ルートは Basic 認証ゲートで包む。ルート `/` と `/health` は
/// 認証なしでアクセスできる。
pub fn build_app<R>(credentials: Arc<CredentialSet>, repository: R) -> Router
where
   R: TaskRepository + 'static,
{
   let task_state = Arc::new(TaskState { repository });
   let auth_state = AuthState { credentials };

   let protected = Router::new()
      .route("/list", get(list_tasks::<R>))
      .route(
         "/task",
         post(create_task::<R>)
            .put(update_task::<R>)
            .delete(delete_task::<R>),
      )
      .route_layer(from_fn_with_state(auth_state, require_basic_auth))
      .with_state(task_state);

   Router::new()
      .merge(protected)
      .route("/", get(index))
      .route("/health", get(health_check))
      .layer(TraceLayer::new_for_http())
}
