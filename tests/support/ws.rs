//! Single-connection websocket server built on `accept_async`.

use std::future::Future;

use futures_util::StreamExt;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, WebSocketStream};

pub type ServerSocket = WebSocketStream<TcpStream>;

/// Accept one websocket connection and hand it to `handler`.
///
/// Returns the URL to connect to.
pub async fn spawn_ws<F, Fut>(handler: F) -> String
where
    F: FnOnce(ServerSocket) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let ws = accept_async(stream).await.unwrap();
        handler(ws).await;
    });

    format!("ws://{addr}/ws/market")
}

/// Accept TCP connections but never answer the websocket handshake.
pub async fn spawn_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("ws://{addr}/ws/market")
}

/// Keep reading until the client goes away, answering its close handshake.
pub async fn drain(mut ws: ServerSocket) {
    while let Some(Ok(_)) = ws.next().await {}
}
