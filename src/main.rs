use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use request_logger::capture_service::simple_capture_service::SimpleCaptureService;
use request_logger::cli_arguments::CliArguments;
use request_logger::record_sink::json_line_sink::JsonLineSink;
use request_logger::record_sink::structured_log_sink::StructuredLogSink;
use request_logger::request_id::UuidRequestIdGenerator;
use request_logger::{ServerState, router};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let log_writer = args.log_file.open().unwrap_or_else(|err| {
        error!("{err}");
        std::process::exit(1);
    });

    let listen_address = format!("{}:{}", args.listen_ip, args.port);
    let tcp_listener = tokio::net::TcpListener::bind(&listen_address)
        .await
        .unwrap();

    info!("Server starting on {}", listen_address);

    let capture_service = Arc::new(SimpleCaptureService::new(
        Arc::new(UuidRequestIdGenerator::default()),
        Arc::new(StructuredLogSink::new(log_writer)),
        Arc::new(JsonLineSink::stdout()),
    ));

    info!("Capture service wired to {:?} and stdout", args.log_file);

    let state = ServerState { capture_service };

    axum::serve(
        tcp_listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
