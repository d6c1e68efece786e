//! エラー型定義
//!
//! 共通レイヤーのエラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 共通レイヤーのResult型
pub type CommonResult<T> = Result<T, CommonError>;
