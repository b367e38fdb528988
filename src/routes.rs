mod advisor;
mod prediction;
mod records;
mod root;
mod settings;
mod stats;

use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn app(state: AppState) -> Router {
    let origins = allow_origin(&state.config.cors_origins);

    Router::new()
        .merge(root::new())
        .merge(stats::new())
        .nest("/settings", settings::new())
        .nest("/records", records::new())
        .nest("/prediction", prediction::new())
        .nest("/advisor", advisor::new())
        .fallback(root::handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_origin(origins)
                .allow_headers([CONTENT_TYPE]),
        )
        .with_state(state)
}

// "*" 代表全部允許，其餘逐一解析
fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignore invalid cors origin {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(values)
}
