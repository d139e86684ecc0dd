use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::provider::WeatherProviderHandle;
use crate::routes;

// Anything that goes in here must be a handle or pointer that can be cloned.
#[derive(Clone)]
pub struct AppState {
    pub provider: WeatherProviderHandle,
}

pub fn create_app(provider: WeatherProviderHandle) -> Router {
    let state = AppState { provider };

    Router::new()
        .nest("/api/weather", routes::weather::routes(state))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

// The uri carries the city or coordinates, so only the method is recorded.
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!("request", method = %request.method())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
}
