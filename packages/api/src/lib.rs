//! Reference implementation of the Prenoms HTTP API.
//!
//! Storage is process-local: restarting the server forgets every game, name
//! and vote. Authentication is delegated to a reverse proxy which forwards the
//! username in a trusted header.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;

use state::AppState;

/// Builds the application router with every route mounted under `prefix`.
pub fn app(state: AppState, prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api: Router<AppState> = Router::new()
        .merge(routes::health::routes())
        .merge(routes::me::routes())
        .merge(routes::users::routes())
        .merge(routes::names::routes())
        .merge(routes::games::routes());

    let router = if prefix.is_empty() || prefix == "/" {
        api
    } else {
        Router::<AppState>::new().nest(prefix, api)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
