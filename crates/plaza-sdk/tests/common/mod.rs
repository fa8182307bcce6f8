/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for plaza-sdk tests

use plaza_sdk::{ClientConfig, PlazaClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A well-known test private key
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from TEST_PRIVATE_KEY
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn test_client(server: &MockServer) -> PlazaClient {
    PlazaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Mount a nonce endpoint serving a fixed challenge
#[allow(dead_code)]
pub async fn mount_nonce_mock(server: &MockServer, challenge: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/auth/nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": challenge,
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
