//! # Task Service ライブラリ
//!
//! タスク一覧サービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP レスポンスへのエラー変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: Basic 認証ミドルウェア

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
