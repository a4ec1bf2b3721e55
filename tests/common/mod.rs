//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use duckmail::DuckMailClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::time::Duration;

pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Test fixture that manages a mock signup server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/api", server.url());
        Self { server, base_url }
    }

    /// Client pointed at the mock server. No session is opened.
    pub fn client(&self) -> DuckMailClient {
        DuckMailClient::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("valid test config")
    }

    /// Signup endpoint answering `status` with a JSON `body`, hit exactly `hits` times
    pub async fn mock_signup(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.mock_signup_matching(Matcher::Any, status, body, hits).await
    }

    /// Like [`MockServerFixture::mock_signup`], only matching requests whose body fits `body_matcher`
    pub async fn mock_signup_matching(
        &mut self,
        body_matcher: Matcher,
        status: usize,
        body: &str,
        hits: usize,
    ) -> Mock {
        self.server
            .mock("POST", SIGNUP_PATH)
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(body_matcher)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }
}

/// Base URL of a port nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/api", addr)
}
