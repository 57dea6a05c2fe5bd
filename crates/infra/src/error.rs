//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//! API 層でこのエラーを HTTP レスポンス（500）に変換する。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
   /// データベースエラー
   ///
   /// SQL クエリの実行失敗、接続エラー、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[from] sqlx::Error),

   /// 予期しないエラー
   ///
   /// 上記に分類できないエラー。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self::Unexpected(msg.into())
   }
}
