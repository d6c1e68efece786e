//! join subcommand

use clap::Args;

use super::print_json;
use crate::client::ApiClient;

/// Arguments for the join subcommand
#[derive(Args, Debug, Clone)]
pub struct JoinArgs {
    /// Draft ID to join
    pub id: i64,
}

/// Execute the join command
pub async fn execute(client: &ApiClient, args: &JoinArgs) -> anyhow::Result<()> {
    let data = client.join(args.id).await?;
    print_json(&data)
}
