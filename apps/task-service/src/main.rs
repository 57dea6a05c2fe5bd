//! # Task Service サーバー
//!
//! Basic 認証付きのタスク一覧 CRUD API サーバー。
//!
//! ## 役割
//!
//! - **タスク管理**: `tasks` テーブルに対する一覧・作成・更新・削除
//! - **認証ゲート**: 起動時に注入された認証情報による HTTP Basic 認証
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `AUTH_USERS` | No | `user:pass` のカンマ区切り（デフォルト: 固定 2 ユーザー） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! DATABASE_URL=postgres://... cargo run -p taskboard-task-service
//! ```
//!
//! 接続確立とスキーマ初期化のいずれかに失敗した場合、リクエストの
//! 受付を開始せずにプロセスを終了する。

use std::{net::SocketAddr, sync::Arc};

use taskboard_infra::{db, repository::PostgresTaskRepository};
use taskboard_task_service::{app_builder::build_app, config::AppConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Task Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,taskboard=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Task Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成し、スキーマを冪等に初期化する
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   db::ensure_schema(&pool)
      .await
      .expect("スキーマ初期化に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let repository = PostgresTaskRepository::new(pool);
   let app = build_app(Arc::new(config.credentials.clone()), repository);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Task Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
