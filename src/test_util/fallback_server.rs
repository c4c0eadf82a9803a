//! Local stand-in for the fallback status API.

use axum::{routing::get, Json, Router};
use tokio::net::TcpListener;

/// Serves `body` as JSON on `GET /server` and returns the endpoint URL.
pub async fn spawn_json(body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/server",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );

    serve(router).await
}

/// Serves a raw, non-JSON body on `GET /server` and returns the endpoint URL.
pub async fn spawn_raw(body: &'static str) -> String {
    let router = Router::new().route("/server", get(move || async move { body }));

    serve(router).await
}

/// Returns a URL on a local port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);

    format!("http://{}/server", addr)
}

/// Builds a client with a short timeout for tests.
pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build test HTTP client")
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fallback test server failed");
    });

    format!("http://{}/server", addr)
}
