mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Duration;
use upcloud::{ClientConfig, Service};

#[derive(Parser)]
#[command(name = "upcloud")]
#[command(
    about = "Bulk cleanup of UpCloud servers and storages",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// API user name
    #[arg(long, env = "UPCLOUD_USERNAME", hide_env_values = true)]
    username: String,

    /// API password
    #[arg(long, env = "UPCLOUD_PASSWORD", hide_env_values = true)]
    password: String,

    /// API root URL
    #[arg(
        long,
        env = "UPCLOUD_API_URL",
        default_value = upcloud::config::DEFAULT_BASE_URL
    )]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "UPCLOUD_TIMEOUT_SECS", default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stop and delete every server together with its storages
    DeleteServers {
        /// Seconds to wait for each server to stop
        #[arg(long, default_value_t = 300)]
        stop_timeout: u64,
    },
    /// Delete every private storage
    DeleteStorage,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new(cli.username, cli.password)
        .with_base_url(cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout));
    let service = Service::from_config(config)?;

    let summary = match cli.command {
        Commands::DeleteServers { stop_timeout } => {
            commands::delete_servers::handle(&service, Duration::from_secs(stop_timeout)).await?
        }
        Commands::DeleteStorage => commands::delete_storage::handle(&service).await?,
    };

    println!();
    summary.print();

    if summary.has_failures() {
        eprintln!("{}", "Cleanup finished with failures".red().bold());
        std::process::exit(1);
    }

    Ok(())
}
