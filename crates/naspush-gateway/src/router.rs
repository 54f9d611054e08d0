//! Axum router wiring.
//!
//! TrueNAS posts to either `/` or `/message`; both mount the same handler.
//! The Prometheus scrape route exists only when metrics are enabled, so a
//! disabled deployment answers 404 on `/metrics`.

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, relay};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", post(relay::handle_alert))
        .route("/message", post(relay::handle_alert));

    if state.registry().is_some() {
        router = router.route("/metrics", get(render_metrics));
    }

    router.with_state(state)
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state.registry().map(|r| r.render()).unwrap_or_default()
}
