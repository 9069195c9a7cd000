use anyhow::Result;
use clap::{Parser, Subcommand};

/// jetfuel - agency website backend
#[derive(Parser)]
#[command(name = "jetfuel")]
#[command(about = "Serves the JetFuel website and relays contact form submissions", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = jetfuel::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    jetfuel::observability::init_observability(
        "jetfuel",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => jetfuel::cli::serve(config, host, port).await,
    }
}
