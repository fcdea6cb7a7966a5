use async_trait::async_trait;
use axum::body::Body;
use http::Request;

use crate::record::request_record::RequestRecord;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptureService: Send + Sync {
    async fn capture(&self, request: Request<Body>, client_address: String) -> RequestRecord;
}
