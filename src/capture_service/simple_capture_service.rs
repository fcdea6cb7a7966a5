use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use chrono::Utc;
use http::header::CONTENT_LENGTH;
use http::{HeaderMap, Request};
use tracing::error;

use crate::capture_service::capture_service::CaptureService;
use crate::record::request_record::RequestRecord;
use crate::record_sink::record_sink::RecordSink;
use crate::request_id::RequestIdGenerator;

/// Builds one record per inbound request and hands it to both sinks. All
/// collaborators are injected; nothing global is consulted at request time.
pub struct SimpleCaptureService {
    id_generator: Arc<dyn RequestIdGenerator + Send + Sync>,
    log_sink: Arc<dyn RecordSink + Send + Sync>,
    json_sink: Arc<dyn RecordSink + Send + Sync>,
}

impl SimpleCaptureService {
    pub fn new(
        id_generator: Arc<dyn RequestIdGenerator + Send + Sync>,
        log_sink: Arc<dyn RecordSink + Send + Sync>,
        json_sink: Arc<dyn RecordSink + Send + Sync>,
    ) -> Self {
        Self {
            id_generator,
            log_sink,
            json_sink,
        }
    }
}

fn declared_content_length(headers: &HeaderMap) -> i64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(-1)
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut collected: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        collected
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    collected
}

#[async_trait]
impl CaptureService for SimpleCaptureService {
    async fn capture(&self, request: Request<Body>, client_address: String) -> RequestRecord {
        // The id comes first so a failure later in the capture can still be
        // correlated in the logs.
        let id = self.id_generator.generate();

        let (parts, body) = request.into_parts();
        let protocol = format!("{:?}", parts.version);
        let method = parts.method.to_string();
        let url = parts.uri.to_string();
        let content_length = declared_content_length(&parts.headers);
        let headers = collect_headers(&parts.headers);

        let body = match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                error!("{id}\tError reading request body: {err}");
                String::new()
            }
        };

        let record = RequestRecord {
            id,
            iso_date_time: Utc::now(),
            protocol,
            method,
            url,
            content_length,
            ip_client: client_address,
            headers,
            body,
        };

        for sink in [&self.log_sink, &self.json_sink] {
            if let Err(err) = sink.emit(&record) {
                error!("{}\tSink emission failed: {err}", record.id);
            }
        }

        record
    }
}
