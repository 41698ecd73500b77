//! In-process HTTP server for API tests.

use axum::Router;
use url::Url;

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}
