//! Shared utilities for integration tests.

use std::net::SocketAddr;

use request_inspector::config::AppConfig;
use request_inspector::http::HttpServer;
use request_inspector::lifecycle::Shutdown;

/// Spawn the service on an ephemeral local port.
///
/// Returns the bound address and the shutdown coordinator; tests trigger
/// the coordinator when they are done with the server.
pub async fn spawn_app() -> (SocketAddr, Shutdown) {
    let config = AppConfig::default();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
