use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::DbConfig;
use crate::db::store::Connector;
use crate::handlers::{health_handler, page_handler};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState<C> {
    pub connector: C,
    pub db: Arc<DbConfig>,
    pub hostname: Arc<str>,
}

impl<C: Connector> AppState<C> {
    pub fn new(connector: C, db: DbConfig, hostname: impl Into<Arc<str>>) -> Self {
        Self {
            connector,
            db: Arc::new(db),
            hostname: hostname.into(),
        }
    }
}

pub fn app_router<C: Connector>(state: AppState<C>) -> Router {
    Router::new()
        .route("/", get(page_handler::<C>))
        .route("/health", get(health_handler::<C>))
        .with_state(state)
}
