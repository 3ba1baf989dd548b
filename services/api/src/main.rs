use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use han_pinyin::{ConversionConfig, PinyinEngine, ToneStyle};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// HTTP service converting Chinese characters to pinyin.
#[derive(Debug, Parser)]
#[command(name = "pinyin-api", version, about)]
struct Args {
    /// Port to listen on (all interfaces)
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

/// Accept the single-dash `-port N` / `-port=N` spelling as well.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix("-port") {
            Some("") => "--port".to_string(),
            Some(rest) if rest.starts_with('=') => format!("--port{rest}"),
            _ => arg,
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse_from(normalize_args(std::env::args()));
    info!("default port 8080, use `-port <n>` to listen on another port");

    // fixed for the service; never changes once serving starts
    let config = ConversionConfig::new(ToneStyle::Tone);
    let app = pinyin_api::build_router(PinyinEngine, config);

    let listener = bind(args.port).await?;
    let addr = listener.local_addr().context("listener has no local address")?;

    info!(%addr, style = %config.style, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("server stopped");
    Ok(())
}

/// Listens on every interface; port 0 picks a free one.
async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("cannot listen for SIGTERM: {e}");
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
    info!("shutdown signal received");
}
