//! API router.
//!
//! Middleware stack (outermost → innermost): CORS → access log → handler.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the API router with every endpoint under `/api/`.
pub fn api_router(ctx: ApiContext) -> Router {
    // Path params use `:param` syntax (axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/symptoms/analyze", post(endpoints::symptoms::analyze))
        .route("/symptoms/previous", get(endpoints::symptoms::previous))
        .route("/hospitals", get(endpoints::hospitals::list))
        .route(
            "/profiles",
            get(endpoints::profiles::list).post(endpoints::profiles::create),
        )
        .route(
            "/profiles/:id",
            get(endpoints::profiles::detail)
                .put(endpoints::profiles::update)
                .delete(endpoints::profiles::delete),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CorsLayer::permissive())
}
