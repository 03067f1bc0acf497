//! Server entrypoint: `clip server` and `clip version`.

use clap::{Args, Parser, Subcommand};
use clip_core::{format_size, parse_size, DEFAULT_HOST, DEFAULT_PORT};
use clip_server::{serve_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "clip", about = "A simple pastebin service", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the clip HTTP server
    Server(ServerArgs),
    /// Print the version of clip
    Version,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct ServerArgs {
    /// Host to bind to
    #[arg(long, env = "CLIP_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "CLIP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Maximum size of a single paste (e.g. 512K, 10M); 0 means unlimited
    #[arg(long, env = "CLIP_MAX_PASTE_SIZE", default_value = "0", value_parser = parse_size)]
    max_paste_size: u64,

    /// Maximum size of all pastes combined; oldest pastes are evicted first
    #[arg(long, env = "CLIP_MAX_TOTAL_SIZE", default_value = "0", value_parser = parse_size)]
    max_total_size: u64,
}

impl From<ServerArgs> for Config {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            max_paste_size: args.max_paste_size,
            max_total_size: args.max_total_size,
        }
    }
}

fn version_line() -> String {
    format!("clip v{}", env!("CARGO_PKG_VERSION"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("{}", version_line());
            Ok(())
        }
        Commands::Server(args) => run_server(args.into()).await,
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clip_server=info,clip_core=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = config.bind_addr();
    tracing::info!(
        "Paste limits: per paste {}, total {}",
        format_size(config.max_paste_size),
        format_size(config.max_total_size)
    );

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    match listener.local_addr() {
        Ok(addr) => tracing::info!("clip server listening on http://{}", addr),
        Err(_) => tracing::info!("clip server listening on http://{}", bind_addr),
    }

    serve_router(listener, state, shutdown_signal()).await?;
    tracing::info!("clip server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
