//! エラー型定義
//!
//! クライアント呼び出しのエラーと、マウントしたハンドラーが返すAPIエラー
//!
//! # エラーレスポンス
//!
//! `ApiError` はすべて `{"error": "..."}` 形式のJSONとして返る。
//! 内部メッセージはログにのみ出し、クライアントには `external_message()` を返す。

use axum::{http::StatusCode, response::IntoResponse, Json};
use r38_common::error::CommonError;
use r38_common::types::JsonError;
use thiserror::Error;

/// クライアント側のエラー型
#[derive(Debug, Error)]
pub enum ClientError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Invalid request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Query string could not be encoded
    #[error("Query encode error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    /// Network failure or timeout
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Status {
        /// レスポンスのステータスコード
        status: reqwest::StatusCode,
        /// サーバーが返したエラーメッセージ（なければ本文そのもの）
        message: String,
    },

    /// Response body did not match the declared shape
    #[error("Response decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// ステータスエラーのときそのコードを返す
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// クライアント側のResult型
pub type ClientResult<T> = Result<T, ClientError>;

/// マウントしたハンドラー用のエラー型
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request did not match the declared query/body shape
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 外部クライアントに返してよいメッセージ
    ///
    /// 形の不一致はクライアントが直すべきものなので詳細を返す。
    /// それ以外は内部情報を含み得るため固定文言にする。
    pub fn external_message(&self) -> String {
        match self {
            Self::BadRequest(detail) => detail.clone(),
            Self::NotFound(_) => "Not found".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(JsonError::new(self.external_message()))).into_response()
    }
}
