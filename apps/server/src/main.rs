use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use discos_api::{ServerConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND};
use discos_core::DiskCatalog;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "discos-server", version, about = "Disk catalog HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the catalog over HTTP (default).
    Serve(ServeArgs),
    /// Print the catalog as JSON and exit.
    Catalog {
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Args)]
struct ServeArgs {
    #[arg(long, default_value_t = DEFAULT_BIND)]
    bind: SocketAddr,
    /// Browser origin allowed by CORS.
    #[arg(long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    allowed_origin: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        let config = ServerConfig::default();
        Self {
            bind: config.bind,
            allowed_origin: config.allowed_origin,
        }
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            allowed_origin: args.allowed_origin,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            init_tracing();
            let config = ServerConfig::from(args);
            discos_api::serve(&config, DiskCatalog::seeded()).await
        }
        Command::Catalog { pretty } => {
            let catalog = DiskCatalog::seeded();
            if pretty {
                println!("{}", serde_json::to_string_pretty(catalog.list_disks())?);
            } else {
                println!("{}", serde_json::to_string(catalog.list_disks())?);
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
