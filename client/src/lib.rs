//! r38 API client
//!
//! ドラフトサーバーREST APIの型付きエンドポイントレジストリとクライアント

#![warn(missing_docs)]

/// エンドポイント記述子（ルート・メソッド・型）
pub mod endpoint;

/// 登録済みエンドポイント
pub mod routes;

/// HTTPクライアント
pub mod client;

/// サーバー側マウントヘルパー
pub mod server;

/// エラー型
pub mod error;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use client::{ApiClient, EndpointCall};
pub use endpoint::{Endpoint, Method, RouteDescriptor};
pub use error::{ApiError, ClientError, ClientResult};
