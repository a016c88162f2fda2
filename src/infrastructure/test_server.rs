//! Local axum server standing in for the signup API in gateway tests.

use axum::Router;
use tokio::net::TcpListener;

use crate::infrastructure::api_client::ApiClient;

/// Serve `router` on an ephemeral port and return a client pointed at it.
pub async fn spawn(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(reqwest::Client::new(), format!("http://{}", addr))
}

/// Client pointed at a port nothing listens on.
pub async fn unreachable() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(reqwest::Client::new(), format!("http://{}", addr))
}
