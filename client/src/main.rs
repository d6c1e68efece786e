//! r38 CLI Entry Point

use clap::Parser;
use r38_client::cli::{self, Cli, Commands};
use r38_client::{logging, ApiClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = || -> anyhow::Result<ApiClient> {
        let config = cli.client_config();
        tracing::debug!(base_url = %config.base_url, "Using draft server");
        Ok(ApiClient::new(&config)?)
    };

    match &cli.command {
        Commands::Pick(args) => cli::pick::execute(&client()?, args).await,
        Commands::Join(args) => cli::join::execute(&client()?, args).await,
        Commands::Drafts => cli::drafts::execute(&client()?).await,
        Commands::Whoami => cli::whoami::execute(&client()?).await,
        Commands::Routes => {
            cli::routes::execute();
            Ok(())
        }
    }
}
