//! # Task Service エラー定義
//!
//! Task Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## レスポンス契約
//!
//! エラーレスポンスはステータスコードのみで表現し、ボディは常に空。
//! リトライや部分的な回復は行わず、発生箇所で即座にステータスへ変換する。

use axum::{
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskboard_infra::InfraError;
use thiserror::Error;

/// Task Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 認証失敗（Basic 認証情報の欠落・不一致）
   #[error("認証エラー")]
   Unauthorized,

   /// 不正なリクエスト（不正な JSON、整数でない id など）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// ストア障害（接続・クエリ・変換の失敗）
   #[error("インフラエラー: {0}")]
   Infra(#[from] InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = match &self {
         ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
         ApiError::BadRequest(reason) => {
            tracing::debug!("不正なリクエスト: {}", reason);
            StatusCode::BAD_REQUEST
         }
         ApiError::Infra(e) => {
            tracing::error!("インフラエラー: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
         }
      };

      status.into_response()
   }
}
