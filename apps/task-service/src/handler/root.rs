//! # ルートハンドラ
//!
//! 認証なしでアクセスできる唯一のタスク系エンドポイント。

use axum::http::StatusCode;

/// ルートエンドポイント
///
/// ## エンドポイント
/// GET /
///
/// サーバー側にログを 1 行出力するのみで、レスポンスは空ボディの 200。
pub async fn index() -> StatusCode {
   tracing::info!("ToDo list");
   StatusCode::OK
}
