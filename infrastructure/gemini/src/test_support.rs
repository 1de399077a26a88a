use std::time::Duration;

use poem::listener::TcpAcceptor;
use poem::{Route, Server, handler};

/// Serves `route` on an ephemeral loopback port and returns its base URL.
pub async fn spawn_provider(route: Route) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let acceptor = TcpAcceptor::from_tokio(listener).unwrap();
    tokio::spawn(Server::new_with_acceptor(acceptor).run(route));
    format!("http://{}", addr)
}

/// Base URL where nothing is listening.
pub async fn unreachable_provider() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[handler]
pub async fn slow_provider() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "{}"
}
