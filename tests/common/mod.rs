//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use hr_helpdesk::{HelpdeskConfig, HttpServer, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A helpdesk server running on an ephemeral port over a throwaway data dir.
pub struct TestServer {
    pub addr: SocketAddr,
    pub data_dir: TempDir,
    shutdown: Shutdown,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(tweak: impl FnOnce(&mut HelpdeskConfig)) -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let mut config = HelpdeskConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.storage.data_dir = data_dir.path().to_string_lossy().into_owned();
        tweak(&mut config);

        let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config).unwrap();
        let server_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            addr,
            data_dir,
            shutdown,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A raw client that keeps cookies but does not follow redirects.
    #[allow(dead_code)]
    pub fn http(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()
            .unwrap()
    }

    #[allow(dead_code)]
    pub fn read_data(&self, file: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(self.data_dir.path().join(file)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

impl TestServer {
    #[allow(dead_code)]
    pub fn write_data(&self, file: &str, value: &serde_json::Value) {
        let text = serde_json::to_string_pretty(value).unwrap();
        std::fs::write(self.data_dir.path().join(file), text).unwrap();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
