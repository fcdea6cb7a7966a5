use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::warn;

const FAVICON_PATH: &str = "./favicon.ico";

pub(crate) async fn favicon() -> impl IntoResponse {
    match tokio::fs::read(FAVICON_PATH).await {
        Ok(contents) => ([(header::CONTENT_TYPE, "image/x-icon")], contents).into_response(),
        Err(err) => {
            warn!("Favicon {FAVICON_PATH} could not be read: {err}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
