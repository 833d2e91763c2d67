use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};

use pokegate_config::{CorsConfig, ServerVariant};

use crate::logging::logging_middleware;
use crate::modules::resources::router::{init_profile_router, init_resources_router};
use crate::modules::session::router::{init_session_router, init_single_token_session_router};
use crate::state::AppState;

/// Builds the application for the selected demo variant.
pub fn init_app(variant: ServerVariant, state: AppState) -> Router {
    match variant {
        ServerVariant::Pair => init_router(state),
        ServerVariant::Single => init_single_token_router(state),
    }
}

/// Access/refresh token server.
pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(init_session_router())
        .merge(init_resources_router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(cors),
        )
}

/// Single-token server: `/login` and `/profile` only.
pub fn init_single_token_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(init_single_token_session_router())
        .merge(init_profile_router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(cors),
        )
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
