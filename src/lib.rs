pub mod capture_service;
pub mod cli_arguments;
pub mod log_writer;
pub mod record;
pub mod record_sink;
pub mod request_id;

mod route;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::Request;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};

use crate::capture_service::capture_service::CaptureService;
use crate::route::capture::capture;
use crate::route::favicon::favicon;

// Bound on reading a request and writing its response; a request that
// overruns it is aborted and shows up as a body read failure in the capture.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ServerState {
    pub capture_service: Arc<dyn CaptureService + Send + Sync>,
}

pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .route("/favicon.ico", get(favicon))
        .fallback(capture)
        .with_state(server_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(TimeoutLayer::new(DEFAULT_REQUEST_TIMEOUT))
}
