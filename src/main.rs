mod fetch;
mod models;
mod parser;
mod service;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mangabat_scraper", about = "Mangabat series metadata and chapter-image scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract series metadata and the full chapter list as JSON
    Series {
        /// Series page URL
        url: String,
        /// Category tag attached to every chapter record
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Extract the ordered image list of a chapter page
    Images {
        /// Chapter page URL
        url: String,
    },
    /// Print the static service descriptor
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Series { url, category } => {
            let client = fetch::client()?;
            let result = parser::process_title(&client, &url, category.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Images { url } => {
            let client = fetch::client()?;
            let images = parser::images::chapter_images(&client, &url).await?;
            if images.is_empty() {
                println!("No images found.");
            } else {
                for image in &images {
                    println!("{}", image);
                }
            }
        }
        Commands::Info => {
            println!("{}", serde_json::to_string_pretty(&service::get_info())?);
        }
    }

    Ok(())
}
