use std::fs;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::RngCore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forecourt::auth::{PasswordHasher, TokenService};
use forecourt::config::ServerConfig;
use forecourt::server::{AppState, create_router};
use forecourt::store::{SqliteStore, Store};

#[cfg(unix)]
fn set_restrictive_permissions(path: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Failed to set permissions on {}: {e}", path.display());
    }
}

fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[derive(Parser)]
#[command(name = "forecourt")]
#[command(about = "A car dealership records API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory (create database and signing secret)
    Init {
        /// Data directory for the database and signing secret
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,

        /// Data directory for the database and signing secret
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Token signing secret. Overrides the secret file created by init.
        #[arg(long, env = "FORECOURT_SIGNING_SECRET")]
        signing_secret: Option<String>,
    },
}

fn run_init(data_dir: String) -> anyhow::Result<()> {
    let config = ServerConfig {
        data_dir: data_dir.into(),
        ..ServerConfig::default()
    };
    fs::create_dir_all(&config.data_dir)?;

    let secret_file = config.secret_path();
    if secret_file.exists() {
        bail!(
            "Server already initialized. Signing secret exists at: {}",
            secret_file.display()
        );
    }

    let store = SqliteStore::new(config.db_path())?;
    store.initialize()?;

    fs::write(&secret_file, generate_secret())?;

    #[cfg(unix)]
    set_restrictive_permissions(&secret_file);

    println!("Database created at: {}", config.db_path().display());
    println!("Signing secret written to: {}", secret_file.display());

    Ok(())
}

/// Resolves the signing secret: an explicit flag or environment value wins,
/// otherwise the file written by `init` is read.
fn load_secret(config: &ServerConfig, flag: Option<String>) -> anyhow::Result<String> {
    if let Some(secret) = flag {
        return Ok(secret);
    }

    let secret_file = config.secret_path();
    if !secret_file.exists() {
        bail!(
            "No signing secret found. Run 'forecourt init' first, or pass --signing-secret (or set FORECOURT_SIGNING_SECRET)."
        );
    }

    Ok(fs::read_to_string(&secret_file)?.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("forecourt=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { data_dir } => {
            run_init(data_dir)?;
        }
        Commands::Serve {
            host,
            port,
            data_dir,
            signing_secret,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir: data_dir.into(),
            };

            let secret = load_secret(&config, signing_secret)?;

            fs::create_dir_all(&config.data_dir)?;
            let store = SqliteStore::new(config.db_path())?;
            store.initialize()?;

            let state = Arc::new(AppState {
                store: Arc::new(store),
                tokens: TokenService::new(secret.as_bytes()),
                hasher: PasswordHasher::new(),
            });

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
