//! # Basic 認証ミドルウェア
//!
//! HTTP Basic 認証の認証情報を、起動時に注入された
//! [`CredentialSet`] と照合する認証ゲート。
//!
//! ## 挙動
//!
//! 認証情報の欠落・ヘッダーの形式不正・base64 の破損・いずれの組とも
//! 不一致、のすべてで fail closed: 401 Unauthorized（空ボディ）を返し、
//! 後続ハンドラは一切呼び出さない。レート制限・ロックアウト・
//! 監査ログは持たない。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState { credentials };
//!
//! Router::new()
//!     .route("/list", get(list_tasks))
//!     .route_layer(from_fn_with_state(auth_state, require_basic_auth))
//! ```

use std::sync::Arc;

use axum::{
   body::Body,
   extract::State,
   http::{HeaderMap, Request, header},
   middleware::Next,
   response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use taskboard_domain::credential::CredentialSet;

use crate::error::ApiError;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
   pub credentials: Arc<CredentialSet>,
}

/// Basic 認証ミドルウェア
///
/// Authorization ヘッダーから認証情報を取り出し、注入された認証情報の
/// いずれかと完全一致する場合のみ後続ハンドラへ委譲する。
pub async fn require_basic_auth(
   State(state): State<AuthState>,
   request: Request<Body>,
   next: Next,
) -> Response {
   let Some((username, password)) = extract_basic_credentials(request.headers()) else {
      return ApiError::Unauthorized.into_response();
   };

   if !state.credentials.verify(&username, &password) {
      tracing::debug!(username = %username, "Basic 認証に失敗しました");
      return ApiError::Unauthorized.into_response();
   }

   next.run(request).await
}

/// Authorization ヘッダーから Basic 認証の組を取り出す
///
/// スキーム名は大文字小文字を区別しない（RFC 7617 / Go の
/// `Request.BasicAuth` と同じ）。形式が少しでも崩れていれば `None`。
fn extract_basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
   let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
   let (scheme, encoded) = value.split_once(' ')?;
   if !scheme.eq_ignore_ascii_case("Basic") {
      return None;
   }

   let decoded = BASE64.decode(encoded.trim()).ok()?;
   let text = String::from_utf8(decoded).ok()?;
   let (username, password) = text.split_once(':')?;

   Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      http::{Method, StatusCode},
      middleware::from_fn_with_state,
      routing::get,
   };
   use taskboard_domain::credential::Credential;
   use tower::ServiceExt;

   use super::*;

   /// テスト用のダミーハンドラ
   async fn dummy_handler() -> StatusCode {
      StatusCode::OK
   }

   fn test_app() -> Router {
      let auth_state = AuthState {
         credentials: Arc::new(CredentialSet::new(vec![
            Credential::new("Mona", "42"),
            Credential::new("Liza", "315"),
         ])),
      };

      Router::new()
         .route("/protected", get(dummy_handler))
         .route_layer(from_fn_with_state(auth_state, require_basic_auth))
   }

   fn basic_header(username: &str, password: &str) -> String {
      format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
   }

   async fn request_with_header(header_value: Option<&str>) -> StatusCode {
      let mut builder = Request::builder().method(Method::GET).uri("/protected");
      if let Some(value) = header_value {
         builder = builder.header(header::AUTHORIZATION, value);
      }
      let response = test_app()
         .oneshot(builder.body(Body::empty()).unwrap())
         .await
         .unwrap();
      response.status()
   }

   #[tokio::test]
   async fn test_正しい認証情報でハンドラに到達する() {
      let status = request_with_header(Some(&basic_header("Mona", "42"))).await;
      assert_eq!(status, StatusCode::OK);
   }

   #[tokio::test]
   async fn test_2組目の認証情報でも到達する() {
      let status = request_with_header(Some(&basic_header("Liza", "315"))).await;
      assert_eq!(status, StatusCode::OK);
   }

   #[tokio::test]
   async fn test_スキーム名は大文字小文字を区別しない() {
      let header_value = format!("basic {}", BASE64.encode("Mona:42"));
      let status = request_with_header(Some(&header_value)).await;
      assert_eq!(status, StatusCode::OK);
   }

   #[tokio::test]
   async fn test_ヘッダーなしは401になる() {
      let status = request_with_header(None).await;
      assert_eq!(status, StatusCode::UNAUTHORIZED);
   }

   #[tokio::test]
   async fn test_誤ったパスワードは401になる() {
      let status = request_with_header(Some(&basic_header("Mona", "wrong"))).await;
      assert_eq!(status, StatusCode::UNAUTHORIZED);
   }

   #[tokio::test]
   async fn test_別のスキームは401になる() {
      let status = request_with_header(Some("Bearer deadbeef")).await;
      assert_eq!(status, StatusCode::UNAUTHORIZED);
   }

   #[tokio::test]
   async fn test_base64として不正な値は401になる() {
      let status = request_with_header(Some("Basic !!!not-base64!!!")).await;
      assert_eq!(status, StatusCode::UNAUTHORIZED);
   }

   #[tokio::test]
   async fn test_コロン区切りを欠いた値は401になる() {
      let header_value = format!("Basic {}", BASE64.encode("no-separator"));
      let status = request_with_header(Some(&header_value)).await;
      assert_eq!(status, StatusCode::UNAUTHORIZED);
   }
}
