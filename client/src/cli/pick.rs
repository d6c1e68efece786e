//! pick subcommand

use clap::Args;

use super::print_json;
use crate::client::ApiClient;

/// Arguments for the pick subcommand
#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    /// Card IDs to pick (comma separated)
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub cards: Vec<i64>,

    /// Pick from another user's perspective
    #[arg(long = "as")]
    pub as_user: Option<i64>,
}

/// Execute the pick command
pub async fn execute(client: &ApiClient, args: &PickArgs) -> anyhow::Result<()> {
    let data = client.pick(args.cards.clone(), args.as_user).await?;
    print_json(&data)
}
