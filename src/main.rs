use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use pintra_tokencache::backend::request::{TokenRequest, TokenRequestOptions};
use pintra_tokencache::cache::token_cache::TokenCache;
use pintra_tokencache::config::loader::load_config;
use pintra_tokencache::storage::file::FileStorage;
use pintra_tokencache::utils::constants::DEFAULT_STORAGE_DIR;
use pintra_tokencache::utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "tokencache.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a token and print the bearer to stdout
    Get {
        /// Logical name the record is cached under
        #[arg(long)]
        name: String,
        /// Resource identifier to request the token for
        #[arg(long, conflicts_with = "scope")]
        resource: Option<String>,
        /// OAuth-style scope string to request the token for
        #[arg(long)]
        scope: Option<String>,
    },
    /// Drop the persisted token table
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let service_config = load_config(&args.config)?;
    logging::run(&service_config, args.log_level)?;

    // -------------------------------
    // 2. Build storage + cache
    // -------------------------------

    let storage_dir = service_config
        .settings
        .storage_dir
        .clone()
        .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_owned());
    let cache = TokenCache::new(FileStorage::new(&storage_dir));

    // -------------------------------
    // 3. Run the requested operation
    // -------------------------------

    match args.command {
        Command::Get { name, resource, scope } => {
            let request = match (resource, scope) {
                (Some(resource), None) => TokenRequest::resource(name, resource),
                (None, Some(scope)) => TokenRequest::scope(name, scope),
                _ => bail!("exactly one of --resource or --scope is required"),
            };
            let options = TokenRequestOptions {
                nonce: service_config.backend.nonce.resolve()?,
                ajax_url: service_config.backend.ajax_url.clone(),
            };

            match cache.get_token(&request, &options).await {
                Ok(token) => {
                    info!("token '{}' valid until {}", token.name, token.expires);
                    println!("{}", token.bearer);
                }
                Err(err) => bail!("{}", err),
            }
        }
        Command::Clear => {
            cache.clear().await?;
        }
    }

    Ok(())
}
