use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, header};
use axum::response::IntoResponse;
use tracing::debug;

use crate::ServerState;

pub(crate) const MIME_APP_JSON_CHARSET_UTF8: &str = "application/json; charset=UTF-8";
pub(crate) const ACKNOWLEDGEMENT_BODY: &str = "OK\n";

pub(crate) async fn capture(
    State(state): State<ServerState>,
    ConnectInfo(client_address): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> impl IntoResponse {
    let record = state
        .capture_service
        .capture(request, client_address.to_string())
        .await;

    debug!("Request {} captured", record.id);

    // Fixed acknowledgement, independent of what the sinks did.
    (
        [(header::CONTENT_TYPE, MIME_APP_JSON_CHARSET_UTF8)],
        ACKNOWLEDGEMENT_BODY,
    )
}
