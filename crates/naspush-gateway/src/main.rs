//! naspush gateway binary.
//!
//! TrueNAS alert webhook in, Gotify push out. One handler on two paths, an
//! optional `/metrics` scrape, nothing else. Misconfiguration is fatal
//! before any listener is bound.

use tracing_subscriber::{fmt, EnvFilter};

use naspush_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid, refusing to start");
            std::process::exit(1);
        }
    };

    if cfg.metrics_enabled {
        tracing::info!("prometheus metrics will be served on /metrics");
    } else {
        tracing::info!("prometheus metrics are disabled");
    }

    let listen = cfg.listen_addr();
    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "naspush-gateway starting");
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
