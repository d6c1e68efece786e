//! drafts subcommand

use super::print_json;
use crate::client::ApiClient;

/// Execute the drafts command
pub async fn execute(client: &ApiClient) -> anyhow::Result<()> {
    let list = client.draft_list().await?;
    print_json(&list)
}
