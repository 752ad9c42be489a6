use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use std::sync::Arc;

use crate::{balance, item_types, parties, stock, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// HTTP options that do not belong to the engine.
#[derive(Clone, Debug)]
pub struct ServerOptions {
    /// Allowed CORS origins. `"*"` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            cors_origins: vec!["*".to_string()],
        }
    }
}

fn cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("ignoring invalid CORS origin {origin:?}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn api(state: ServerState) -> Router {
    Router::new()
        .route(
            "/item-types",
            post(item_types::create).get(item_types::list),
        )
        .route("/item-types/{name}", delete(item_types::remove))
        .route("/stock", post(stock::create).get(stock::list))
        .route("/stock/{item_number}", delete(stock::remove))
        .route("/stock/{item_number}/sell", put(stock::sell))
        .route(
            "/transactions",
            post(transactions::create).get(transactions::list),
        )
        .route("/transactions/{date}/{name}", delete(transactions::remove))
        .route(
            "/customers-suppliers",
            post(parties::create).get(parties::list),
        )
        .route("/customers-suppliers/{name}/{kind}", delete(parties::remove))
        .route("/balance", get(balance::get))
        .with_state(state)
}

/// Builds the full application router, every route under `/api`.
pub fn router(engine: Engine, options: &ServerOptions) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .nest("/api", api(state))
        .layer(cors(&options.cors_origins))
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
    options: ServerOptions,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine, &options)).await
}
