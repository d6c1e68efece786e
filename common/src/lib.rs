//! r38 共通ライブラリ
//!
//! クライアントとサーバーの間で共有するワイヤ型・設定・エラー型

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型
pub mod error;

/// REST APIのワイヤ型
pub mod types;
