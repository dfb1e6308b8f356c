use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use watcher_api::auth::{generate_jwt, AccessLevel, Claims};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A `watcher-api` process owned by one test; killed when dropped
pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Cargo builds the binary before integration tests run
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_watcher-api"));
        cmd.env("APP_ENV", "development")
            .env("WATCHER_API_HOST", "127.0.0.1")
            .env("WATCHER_API_PORT", port.to_string())
            .env("SECURITY_JWT_SECRET", TEST_JWT_SECRET)
            // Empty URL keeps watchers in memory even if .env names a database
            .env("DATABASE_URL", "")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() <= deadline {
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Start a fresh server with in-memory storage and wait until it answers
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Bearer token for `user` signed with the test server's secret
#[allow(dead_code)]
pub fn token_for(user: &str, access: AccessLevel) -> String {
    let claims = Claims::new(user, access, 1).expect("one hour expiry is in range");
    generate_jwt(&claims, TEST_JWT_SECRET).expect("failed to sign test token")
}
