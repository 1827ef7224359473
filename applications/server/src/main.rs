/// Tracklist Server - track library REST backend
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracklist_server::{api, config::ServerConfig, seed, state::AppState};
use tracklist_storage::TrackStore;

#[derive(Parser)]
#[command(name = "tracklist-server")]
#[command(about = "Track library REST server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TRACKLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Add demo tracks to the data directory
    Seed,
    /// List known genres
    Genres,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracklist_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Seed => {
            let store = open_store(&config).await?;
            let created = seed::seed_demo_tracks(&store).await?;
            println!("Added {} demo tracks", created);
        }
        Commands::Genres => {
            let store = open_store(&config).await?;
            for genre in store.genres().await? {
                println!("{}", genre);
            }
        }
        Commands::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<TrackStore> {
    let store = TrackStore::new(config.storage.data_dir.clone());
    store.initialize().await?;
    Ok(store)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Tracklist Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(&config).await?;
    tracing::info!("Track store initialized at {}", config.storage.data_dir.display());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app = api::router(AppState::new(store, Arc::new(config)));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
