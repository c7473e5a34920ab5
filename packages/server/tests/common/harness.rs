//! Test harness that serves the real router on an ephemeral port.
//!
//! Each test gets its own server and its own scripted provider, so tests
//! never share state.

use anyhow::{Context, Result};
use karm_core::kernel::{BaseOtpProvider, MockOtpProvider, ServerDeps};
use karm_core::server::build_app;
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::task::JoinHandle;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub struct TestHarness {
    pub base_url: String,
    pub client: reqwest::Client,
    /// Handle on the provider the server was built with
    pub provider: MockOtpProvider,
    server: JoinHandle<()>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_provider(MockOtpProvider::new())
            .await
            .expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.server.abort();
    }
}

impl TestHarness {
    /// Serve the app backed by `provider`.
    pub async fn with_provider(provider: MockOtpProvider) -> Result<Self> {
        let deps = ServerDeps::new(Some(Arc::new(provider.clone()) as Arc<dyn BaseOtpProvider>));
        Self::start(deps, provider).await
    }

    /// Serve the app with no provider configured.
    pub async fn unconfigured() -> Result<Self> {
        Self::start(ServerDeps::new(None), MockOtpProvider::new()).await
    }

    async fn start(deps: ServerDeps, provider: MockOtpProvider) -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(deps, &[ALLOWED_ORIGIN.to_string()]);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            provider,
            server,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body, returning status and parsed JSON response
    pub async fn post_json(&self, path: &str, body: Value) -> Result<(u16, Value)> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        let status = response.status().as_u16();
        let json = response.json::<Value>().await?;
        Ok((status, json))
    }
}
