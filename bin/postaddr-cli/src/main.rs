//! postaddr CLI - address metadata from the command line
//!
//! Lists form fields, picker values, verifies addresses and renders
//! envelopes against the metadata service, or offline against bundled data.

mod input;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use input::AddressArgs;
use postaddr_cache::{
    AsyncRequest, DataLoadListener, InMemoryClientCache, OfflineRequest,
};
use postaddr_client::{AddressClient, HttpRequest};
use postaddr_common::{AddressData, AddressField, Config, ScriptType};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "postaddr-cli")]
#[command(about = "International postal address metadata, verification and formatting")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "postaddr.toml")]
    config: String,

    /// Metadata service base URL
    #[arg(long)]
    service_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Use bundled country data only
    #[arg(long)]
    offline: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the form fields of a region in display order
    Fields {
        /// Region code, e.g. US
        region: String,
        /// Use the romanized layout
        #[arg(long)]
        latin: bool,
    },
    /// List known values for a hierarchical field
    Candidates {
        /// Field name or code, e.g. ADMIN_AREA or S
        field: AddressField,
        #[command(flatten)]
        address: AddressArgs,
        #[arg(long)]
        latin: bool,
    },
    /// Verify an address and list its problems
    Verify {
        #[command(flatten)]
        address: AddressArgs,
    },
    /// Render an address as envelope lines
    Format {
        #[command(flatten)]
        address: AddressArgs,
    },
    /// Load a region's whole hierarchy
    Prefetch {
        /// Region code, e.g. US
        region: String,
    },
}

/// Logs the start and end of a prefetch
struct ProgressLog<'a> {
    region: &'a str,
}

impl DataLoadListener for ProgressLog<'_> {
    fn loading_begin(&self) {
        info!(region = %self.region, "prefetch started");
    }

    fn loading_end(&self) {
        info!(region = %self.region, "prefetch finished");
    }
}

fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }
    let config_str = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to parse config file: {e}");
        Config::default()
    }))
}

fn script(latin: bool) -> ScriptType {
    if latin {
        ScriptType::Latin
    } else {
        ScriptType::Local
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // CLI flags take precedence over the config file
    let mut config = load_config(&args.config)?;
    if let Some(url) = args.service_url {
        config.service.url = url;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.service.timeout_ms = timeout_ms;
    }
    let log_level = if args.log_level != "info" {
        args.log_level
    } else {
        config.logging.level.clone()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let transport: Arc<dyn AsyncRequest> = if args.offline {
        info!("offline mode, using bundled data only");
        Arc::new(OfflineRequest)
    } else {
        info!(url = %config.service.url, "using metadata service");
        Arc::new(HttpRequest::new(Duration::from_millis(config.service.timeout_ms))?)
    };
    let client = AddressClient::from_config(&config, transport, Arc::new(InMemoryClientCache::new()))?;

    match args.command {
        Commands::Fields { region, latin } => {
            for field in client.field_order(script(latin), &region)? {
                println!("{field}");
            }
        }
        Commands::Candidates {
            field,
            address,
            latin,
        } => {
            let address = address.to_address()?;
            let values = client.candidate_values(field, &address, script(latin)).await?;
            if values.is_empty() {
                warn!(field = %field, "no known values");
            }
            for value in values {
                println!("{}\t{}", value.key, value.name);
            }
        }
        Commands::Verify { address } => {
            let address = address.to_address()?;
            let problems = client.verify(&address).await;
            if problems.is_empty() {
                println!("OK");
            } else {
                for (field, problem) in problems.iter() {
                    println!("{field}: {problem}");
                }
                std::process::exit(1);
            }
        }
        Commands::Format { address } => {
            let address: AddressData = address.to_address()?;
            for line in client.envelope(&address)? {
                println!("{line}");
            }
        }
        Commands::Prefetch { region } => {
            client
                .prefetch_country(&region, Some(&ProgressLog { region: &region }))
                .await?;
            let stats = client.cache().stats();
            println!("Nodes cached: {}", client.cache().len());
            println!("Network requests: {}", stats.network_requests());
        }
    }

    Ok(())
}
