use std::net::{Ipv4Addr, SocketAddr};

use termfocus_core::{refresh::RefreshNotifier, store::SessionStore};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::{
    prelude::*,
    routes::{self, AppState},
};

/// Ingestion side of the daemon: a loopback-only HTTP listener feeding the store.
pub struct TermFocusDaemon {
    port: u16,
    state: AppState,
}

impl TermFocusDaemon {
    pub fn new(port: u16, store: SessionStore, refresh: RefreshNotifier) -> Self {
        Self {
            port,
            state: AppState { store, refresh },
        }
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, self.port));
        TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { port: self.port, source })
    }

    /// Serves requests until `shutdown` is cancelled, then drains in-flight
    /// requests before returning.
    #[instrument(skip_all, name = "Daemon")]
    pub async fn listen(&self, listener: TcpListener, shutdown: CancellationToken) -> Result<()> {
        info!(addr = %listener.local_addr()?, "Terminal Focus listening");
        axum::serve(listener, routes::router(self.state.clone()))
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;
        info!("Listener stopped");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use termfocus_core::{events::WindowId, refresh};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    use super::*;

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let store = SessionStore::new();
        let (notifier, watcher) = refresh::channel();
        let daemon = TermFocusDaemon::new(0, store.clone(), notifier);
        let listener = daemon.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());

        let shutdown = CancellationToken::new();
        let server = tokio::spawn({
            let shutdown = shutdown.clone();
            async move { daemon.listen(listener, shutdown).await }
        });

        let body = r#"{"window_id": "12345", "event_title": "build", "event_msg": "started"}"#;
        let request = format!(
            "POST / HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains(r#"{"status":"registered","window_id":"12345"}"#));
        assert_eq!(store.get_all()[0].window_id, WindowId::parse("12345").unwrap());
        assert!(watcher.take());

        shutdown.cancel();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_port_in_use() {
        let (notifier, _watcher) = refresh::channel();
        let first = TermFocusDaemon::new(0, SessionStore::new(), notifier.clone());
        let listener = first.bind().await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let second = TermFocusDaemon::new(port, SessionStore::new(), notifier);
        assert!(matches!(second.bind().await, Err(Error::Bind { .. })));
    }
}
