use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, warn};

use pokegate::logging::init_tracing;
use pokegate::modules::session::service::spawn_refresh_token_sweeper;
use pokegate::router::init_app;
use pokegate::state::init_app_state;
use pokegate_config::{ServerConfig, ServerVariant};

#[derive(Debug, Parser)]
#[command(name = "pokegate", about = "JWT authentication demo server")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// `pair` for access + refresh tokens, `single` for one access token
    /// (overrides SERVER_VARIANT)
    #[arg(long)]
    variant: Option<ServerVariant>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = init_tracing();

    let mut server_config = ServerConfig::from_env().context("invalid server configuration")?;
    if let Some(port) = cli.port {
        server_config.port = port;
    }
    if let Some(variant) = cli.variant {
        server_config.variant = variant;
    }

    let state = init_app_state().context("invalid configuration")?;
    if state.jwt_config.uses_demo_secrets {
        warn!("using built-in demo JWT secrets; set JWT_SECRET and JWT_REFRESH_SECRET");
    }

    if server_config.variant == ServerVariant::Pair {
        if let Some(period) = state.session_config.sweep_interval() {
            spawn_refresh_token_sweeper(state.clone(), period);
        }
    }

    let app = init_app(server_config.variant, state);

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, variant = %server_config.variant, "JWT demo server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
