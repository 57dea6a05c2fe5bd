//! # ミドルウェア
//!
//! ルートに適用するミドルウェアを定義する。

pub mod basic_auth;

pub use basic_auth::{AuthState, require_basic_auth};
