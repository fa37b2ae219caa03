use std::collections::HashMap;
use std::convert::Infallible;
use std::time::Duration;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

/// Serves `filter` on an ephemeral local port for the rest of the test and
/// returns its base URL.
pub fn spawn_service(filter: BoxedFilter<(Response,)>) -> String {
    let (addr, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

/// Answers `/analyze` with `{"topic": .., "limit": .., "posts": [..]}` built
/// from the request's own query string.
pub fn echo_service() -> String {
    let route = warp::path!("analyze")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and_then(|params: HashMap<String, String>| async move {
            let topic = params.get("topic").cloned().unwrap_or_default();
            let limit: u64 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(0);

            // Stagger replies so concurrent calls finish out of order.
            tokio::time::sleep(Duration::from_millis(20 * (topic.len() as u64 % 4))).await;

            let posts: Vec<_> = (0..limit.min(3))
                .map(|i| json!({ "title": format!("{} post {}", topic, i), "score": i }))
                .collect();
            let body = json!({ "topic": topic, "limit": limit, "posts": posts });
            Ok::<_, Infallible>(warp::reply::json(&body).into_response())
        })
        .boxed();

    spawn_service(route)
}

/// Answers every `/analyze` call with the same status and body.
pub fn fixed_service(status: StatusCode, body: &'static str) -> String {
    let route = warp::path!("analyze")
        .and(warp::get())
        .map(move || warp::reply::with_status(body, status).into_response())
        .boxed();

    spawn_service(route)
}

/// Accepts `/analyze` calls and never answers within a test's lifetime.
pub fn silent_service() -> String {
    let route = warp::path!("analyze")
        .and(warp::get())
        .and_then(|| async {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok::<_, Infallible>(warp::reply().into_response())
        })
        .boxed();

    spawn_service(route)
}

/// Promises a 500-byte JSON body, sends a few bytes of it and hangs up.
pub async fn truncated_body_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"topic\": \"go",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

/// A local URL with nothing listening behind it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
