//! # Task Service 設定
//!
//! 環境変数から Task Service サーバーの設定を読み込む。

use std::env;

use taskboard_domain::credential::{Credential, CredentialSet};

/// `AUTH_USERS` 未設定時の既定値（元サービスの固定 2 ユーザー）
const DEFAULT_AUTH_USERS: &str = "Mona:42,Liza:315";

/// Task Service サーバーの設定
#[derive(Debug, Clone)]
pub struct AppConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
   /// Basic 認証の認証情報
   pub credentials:  CredentialSet,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 設定値が不正な場合はパニックし、リクエストの受付開始前に
   /// プロセスを終了させる。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host:         env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port:         env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("APP_PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL").expect("DATABASE_URL が設定されていません"),
         credentials:  parse_auth_users(
            &env::var("AUTH_USERS").unwrap_or_else(|_| DEFAULT_AUTH_USERS.to_string()),
         )
         .expect("AUTH_USERS の形式が不正です（例: user1:pass1,user2:pass2）"),
      })
   }
}

/// `user:pass` をカンマ区切りで並べた文字列を [`CredentialSet`] に変換する
///
/// パスワードに `:` を含む場合、最初の `:` 以降すべてがパスワードになる。
/// 空文字列や区切りを欠いたエントリはエラー。
fn parse_auth_users(raw: &str) -> Result<CredentialSet, String> {
   let mut credentials = Vec::new();
   for entry in raw.split(',') {
      let entry = entry.trim();
      if entry.is_empty() {
         return Err(format!("空のエントリが含まれています: {raw:?}"));
      }
      let Some((username, password)) = entry.split_once(':') else {
         return Err(format!("`user:pass` 形式ではありません: {entry:?}"));
      };
      credentials.push(Credential::new(username, password));
   }
   if credentials.is_empty() {
      return Err("最低 1 組の認証情報が必要です".to_string());
   }
   Ok(CredentialSet::new(credentials))
}
