use lb_demo::DemoError;
use lb_demo::config::AppConfig;
use lb_demo::db::MySqlConnector;
use lb_demo::middleware::PeerAddrs;
use lb_demo::router::{AppState, app_router};
use lb_demo::service::host_info;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    dotenvy::dotenv().ok();

    let cfg = AppConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.server.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let hostname = host_info::hostname();
    info!(
        hostname = %hostname,
        db_host = %cfg.db.host,
        db_port = cfg.db.port,
        db_name = %cfg.db.name,
        db_user = %cfg.db.user,
        loglevel = %cfg.server.loglevel
    );

    let state = AppState::new(MySqlConnector, cfg.db.clone(), hostname);
    let app = app_router(state);

    let listener = TcpListener::bind(cfg.server.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.server.listen_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<PeerAddrs>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
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
