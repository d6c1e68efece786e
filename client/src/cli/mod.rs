//! CLI module for r38
//!
//! Command-line access to the draft server REST API.

pub mod drafts;
pub mod join;
pub mod pick;
pub mod routes;
pub mod whoami;

use clap::{Parser, Subcommand};
use r38_common::config::ClientConfig;
use serde::Serialize;

use crate::config::client_config_from_env;

/// r38 - Command-line client for the draft server REST API
#[derive(Parser, Debug)]
#[command(name = "r38")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    R38_BASE_URL        Draft server base URL (default: http://localhost:8080)
    R38_TIMEOUT_SECS    Request timeout in seconds (default: 30)
    R38_LOG_LEVEL       Log level (default: info)
"#)]
pub struct Cli {
    /// Draft server base URL (overrides R38_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides R38_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 環境変数の設定にCLIフラグを上書きした設定
    pub fn client_config(&self) -> ClientConfig {
        let mut config = client_config_from_env();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick cards in the current draft
    Pick(pick::PickArgs),
    /// Join a draft
    Join(join::JoinArgs),
    /// List drafts
    Drafts,
    /// Show the logged-in user
    Whoami,
    /// List the registered API routes
    Routes,
}

/// レスポンスを整形JSONで標準出力に書く
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
