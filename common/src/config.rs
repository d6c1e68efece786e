//! 設定管理
//!
//! ClientConfig等の設定構造体

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};

/// APIクライアント設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// ドラフトサーバーのベースURL (デフォルト: "http://localhost:8080")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// 設定値を検証する
    ///
    /// ベースURLはhttp/httpsスキームで始まり、タイムアウトは1秒以上であること。
    pub fn validate(&self) -> CommonResult<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CommonError::Config(format!(
                "base_url must start with http:// or https://: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CommonError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
