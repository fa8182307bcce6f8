/*
[INPUT]:  Message to sign and wallet signing material
[OUTPUT]: Signature string for authentication
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::{Account, MockWalletClient, WalletClient};
use crate::http::Result;
use crate::types::Chain;

/// Trait for wallet signing operations
///
/// Implemented by the built-in adapters (private key, external client).
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Get the network deployment the wallet operates on
    fn chain(&self) -> Chain;

    /// Get the wallet address
    fn address(&self) -> &str;

    /// Sign a message and return the hex-encoded signature (0x...)
    ///
    /// Must not mutate adapter state. May suspend for arbitrary duration
    /// when the signer is user-interaction bound.
    async fn sign_message(&self, message: &str) -> Result<String>;

    /// Escape hatch to the underlying signing transport
    ///
    /// The returned handle is shared; ownership stays with the adapter.
    fn wallet_client(&self) -> Arc<dyn WalletClient>;
}

/// Mock wallet adapter for testing
#[derive(Debug, Clone)]
pub struct MockWalletAdapter {
    chain: Chain,
    address: String,
    client: Arc<MockWalletClient>,
}

impl MockWalletAdapter {
    /// Create a new mock adapter with predetermined signature
    pub fn new(chain: Chain, address: &str, signature: &str) -> Self {
        Self {
            chain,
            address: address.to_string(),
            client: Arc::new(MockWalletClient::new(address, chain.id_u64(), signature)),
        }
    }
}

#[async_trait]
impl WalletAdapter for MockWalletAdapter {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        self.client
            .sign_message(&Account::remote(&self.address), message)
            .await
    }

    fn wallet_client(&self) -> Arc<dyn WalletClient> {
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter =
            MockWalletAdapter::new(Chain::Base, "0x1234567890abcdef", "0xmock_signature");

        assert_eq!(adapter.chain(), Chain::Base);
        assert_eq!(adapter.address(), "0x1234567890abcdef");

        let signature = adapter.sign_message("test message").await.unwrap();
        assert_eq!(signature, "0xmock_signature");

        assert_eq!(
            adapter.wallet_client().address(),
            Some("0x1234567890abcdef".to_string())
        );
    }
}
