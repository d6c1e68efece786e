//! whoami subcommand

use super::print_json;
use crate::client::ApiClient;

/// Execute the whoami command
pub async fn execute(client: &ApiClient) -> anyhow::Result<()> {
    let info = client.user_info().await?;
    print_json(&info)
}
