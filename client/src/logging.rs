//! ロギング初期化
//!
//! tracing-subscriberのfmtレイヤーを標準エラーに出力する。
//! stdoutはCLIのJSON出力専用にする。

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 指定レベルからフィルタを作る
///
/// `reqwest`/`hyper` は `warn` に抑える。
pub fn build_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let directives = format!("{},hyper=warn,reqwest=warn", level);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", level, e))
}

/// 環境変数のログレベルでロギングを初期化する
pub fn init() -> anyhow::Result<()> {
    init_with_level(&crate::config::log_level())
}

/// 指定レベルでロギングを初期化する
pub fn init_with_level(level: &str) -> anyhow::Result<()> {
    let filter = build_filter(level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
