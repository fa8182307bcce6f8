/*
[INPUT]:  Wallet adapter and HTTP client
[OUTPUT]: Authenticated request headers (nonce/signature protocol)
[POS]:    Auth layer - orchestrates complete authentication flow
[UPDATE]: When auth endpoints or flow steps change
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use tracing::{debug, warn};

use crate::auth::{AuthHeaders, PrivateKeyAdapter, WalletAdapter};
use crate::http::{PlazaClient, PlazaError, Result};
use crate::types::{AuthNonceRequest, AuthNonceResponse};

const NONCE_ENDPOINT: &str = "/v1/auth/nonce";

/// Manages the challenge-response authentication flow
///
/// One full cycle per [`get_auth_headers`](Self::get_auth_headers) call;
/// nothing is cached between calls because every server-issued nonce is
/// single-use.
pub struct AuthManager {
    client: PlazaClient,
    adapter: Arc<dyn WalletAdapter>,
    sign_timeout: Option<Duration>,
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("client", &self.client)
            .field("sign_timeout", &self.sign_timeout)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    /// Create a new auth manager over a pre-built wallet adapter
    pub fn new(client: PlazaClient, adapter: Arc<dyn WalletAdapter>) -> Self {
        Self {
            client,
            adapter,
            sign_timeout: None,
        }
    }

    /// Create a new auth manager from a raw private key (legacy path)
    ///
    /// Fails with [`PlazaError::Config`] when the testnet flag is omitted,
    /// before any network call is made.
    pub fn from_private_key(
        client: PlazaClient,
        private_key_hex: &str,
        testnet: Option<bool>,
    ) -> Result<Self> {
        let testnet = testnet.ok_or_else(|| {
            PlazaError::Config(
                "testnet flag is required when constructing from a private key".to_string(),
            )
        })?;
        let adapter = PrivateKeyAdapter::new(private_key_hex, testnet)?;
        Ok(Self::new(client, Arc::new(adapter)))
    }

    /// Bound the signing step with a deadline
    ///
    /// External wallet signing waits on out-of-process user approval and
    /// can otherwise suspend indefinitely. Expiry fails the cycle with
    /// [`PlazaError::Timeout`]; the nonce already fetched is abandoned.
    pub fn with_sign_timeout(mut self, timeout: Duration) -> Self {
        self.sign_timeout = Some(timeout);
        self
    }

    /// Get the wallet adapter this manager signs with
    pub fn adapter(&self) -> &Arc<dyn WalletAdapter> {
        &self.adapter
    }

    /// Run one authentication cycle and return a fresh header bundle
    ///
    /// 1. Request a nonce for the wallet address
    /// 2. Sign the challenge message with the adapter
    /// 3. Assemble the header bundle, stamping the current time
    pub async fn get_auth_headers(&self) -> Result<AuthHeaders> {
        let address = self.adapter.address().to_string();

        let message = self.request_nonce(&address).await?;
        let signature = self.sign_challenge(&message).await?;
        debug!(address = %address, "auth header bundle assembled");

        Ok(AuthHeaders::assemble(
            address,
            signature,
            message,
            self.adapter.chain(),
        ))
    }

    /// Fetch a single-use challenge for `address`
    ///
    /// POST /v1/auth/nonce
    async fn request_nonce(&self, address: &str) -> Result<String> {
        debug!(address, "requesting auth nonce");
        let body = AuthNonceRequest {
            wallet_address: address.to_string(),
        };

        let builder = self.client.request(Method::POST, NONCE_ENDPOINT)?;
        let response = builder.json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "nonce request rejected");
            return Err(PlazaError::NonceRequest {
                status: status.as_u16(),
            });
        }

        let challenge: AuthNonceResponse = response.json().await.map_err(|e| {
            PlazaError::InvalidResponse(format!("nonce response missing 'message': {e}"))
        })?;

        Ok(challenge.message)
    }

    async fn sign_challenge(&self, message: &str) -> Result<String> {
        match self.sign_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.adapter.sign_message(message))
                .await
                .map_err(|_| {
                    warn!("signing did not complete before the configured deadline");
                    PlazaError::Timeout {
                        duration: timeout.as_secs(),
                    }
                })?,
            None => self.adapter.sign_message(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::{ExternalWalletAdapter, MockWalletAdapter, MockWalletClient};
    use crate::http::ClientConfig;
    use crate::types::Chain;

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn test_client(server: &MockServer) -> PlazaClient {
        PlazaClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap()
    }

    fn mock_adapter() -> Arc<MockWalletAdapter> {
        Arc::new(MockWalletAdapter::new(
            Chain::Base,
            TEST_ADDRESS,
            "0xmock_signature",
        ))
    }

    #[tokio::test]
    async fn test_get_auth_headers_happy_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .and(body_json(serde_json::json!({
                "wallet_address": TEST_ADDRESS,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "plaza login challenge 42",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let manager = AuthManager::new(test_client(&server), mock_adapter());
        let headers = manager.get_auth_headers().await.unwrap();

        assert_eq!(headers.wallet_address, TEST_ADDRESS);
        assert_eq!(headers.message, "plaza login challenge 42");
        assert_eq!(headers.signature, "0xmock_signature");
        assert_eq!(headers.chain_id, "8453");
        assert!((Utc::now().timestamp() - headers.timestamp).abs() <= 2);
    }

    #[tokio::test]
    async fn test_nonce_failure_surfaces_status_and_skips_signing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        // A declining client turns any sign attempt into a Signing error,
        // so seeing NonceRequest proves signing was never attempted.
        let client = Arc::new(MockWalletClient::new(TEST_ADDRESS, 8453, "0xunused").declining());
        let adapter = Arc::new(ExternalWalletAdapter::new(client).unwrap());
        let manager = AuthManager::new(test_client(&server), adapter);

        let err = manager.get_auth_headers().await.unwrap_err();
        match err {
            PlazaError::NonceRequest { status } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_message_field_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "nonce": "wrong field name",
            })))
            .mount(&server)
            .await;

        let manager = AuthManager::new(test_client(&server), mock_adapter());
        let err = manager.get_auth_headers().await.unwrap_err();
        assert!(matches!(err, PlazaError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_each_call_runs_a_full_cycle() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "challenge-1",
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/nonce"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "challenge-2",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let manager = AuthManager::from_private_key(test_client(&server), TEST_KEY, Some(false))
            .unwrap();

        let first = manager.get_auth_headers().await.unwrap();
        let second = manager.get_auth_headers().await.unwrap();

        // fresh nonce, fresh signature on every cycle
        assert_ne!(first.message, second.message);
        assert_ne!(first.signature, second.signature);
        assert_eq!(first.wallet_address, second.wallet_address);
    }

    #[tokio::test]
    async fn test_from_private_key_requires_testnet_flag() {
        let server = MockServer::start().await;

        // no mock mounted: a network call would fail loudly, but the
        // configuration error must fire first
        let err = AuthManager::from_private_key(test_client(&server), TEST_KEY, None).unwrap_err();
        assert!(matches!(err, PlazaError::Config(_)));

        let err =
            AuthManager::from_private_key(test_client(&server), "missing-prefix", Some(true))
                .unwrap_err();
        assert!(matches!(err, PlazaError::InvalidPrivateKey(_)));
    }

    #[tokio::test]
    async fn test_from_private_key_selects_chain() {
        let server = MockServer::start().await;

        let manager =
            AuthManager::from_private_key(test_client(&server), TEST_KEY, Some(true)).unwrap();
        assert_eq!(manager.adapter().chain(), Chain::BaseSepolia);
        assert_eq!(manager.adapter().address(), TEST_ADDRESS);
    }
}
