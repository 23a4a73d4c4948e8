mod app;
mod cache;
mod config;
mod graphql;
mod handlers;
mod resolver;
mod state;
#[cfg(test)]
mod test_support;
mod upstream;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quakegate_core::cache::ResponseCache;

use crate::{
    app::create_app, config::Config, graphql::build_schema, resolver::EventResolver,
    state::AppState, upstream::FdsnClient,
};

/// Quakegate - GraphQL gateway for FDSN earthquake catalogs
#[derive(Parser, Debug)]
#[command(name = "quakegate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quakegate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let source = Arc::new(FdsnClient::new(&config.upstream_url));
    tracing::info!(upstream = %source.endpoint(), "Using FDSN event service");

    let mut resolver = EventResolver::new(source);
    let mut cache_backend = None;
    if config.cache_enabled {
        let backend = cache::connect(&config).await?;
        let response_cache = ResponseCache::new(backend.clone(), config.cache_ttl());
        tracing::info!(ttl_secs = response_cache.ttl().as_secs(), "Response caching enabled");
        resolver = resolver.with_cache(response_cache);
        cache_backend = Some(backend);
    } else {
        tracing::info!("Response caching disabled");
    }

    let mut state = AppState::new(build_schema(Arc::new(resolver)));
    if let Some(backend) = cache_backend {
        state = state.with_cache(backend);
    }

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
