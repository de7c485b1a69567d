//! Exchange CLI
//!
//! Command-line interface for the Exchange API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use exchange_client::ExchangeClient;

#[derive(Parser)]
#[command(name = "exchange")]
#[command(author, version, about = "Currency exchange API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Exchange API
    #[arg(
        long,
        env = "EXCHANGE_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List currencies available today
    Currencies {
        /// Print as a JSON array instead of one code per line
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Currency to convert from (e.g. USD)
        source: String,
        /// Currency to convert to (e.g. GBP)
        target: String,
        /// Amount in the source currency
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ExchangeClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currencies { json } => {
            let currencies = client.list_currencies().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&currencies)?);
            } else {
                for code in currencies {
                    println!("{}", code);
                }
            }
        }

        Commands::Convert {
            source,
            target,
            amount,
        } => {
            let formatted = client
                .convert(&source.to_uppercase(), &target.to_uppercase(), amount)
                .await?;
            println!("{}", formatted);
        }
    }

    Ok(())
}
