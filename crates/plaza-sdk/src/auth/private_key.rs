/*
[INPUT]:  Hex-encoded private key and testnet flag
[OUTPUT]: Signed messages and wallet address for the selected network
[POS]:    Auth layer - local private key wallet implementation
[UPDATE]: When signing logic or address formatting changes
*/

use std::str::FromStr;
use std::sync::Arc;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::{Account, WalletAdapter, WalletClient};
use crate::http::{PlazaError, Result};
use crate::types::Chain;

/// Adapter holding a raw secp256k1 private key, signing locally
///
/// Signing is deterministic given (key, message) and performs no network
/// I/O.
pub struct PrivateKeyAdapter {
    chain: Chain,
    address: String,
    client: Arc<LocalWalletClient>,
}

impl std::fmt::Debug for PrivateKeyAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeyAdapter")
            .field("chain", &self.chain)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl PrivateKeyAdapter {
    /// Create a new adapter from a hex-encoded private key
    ///
    /// The key must carry the `0x` prefix. The address is derived
    /// deterministically from the key; the internal signer is bound to the
    /// chain selected by `testnet`.
    pub fn new(private_key_hex: &str, testnet: bool) -> Result<Self> {
        let raw_key = private_key_hex.strip_prefix("0x").ok_or_else(|| {
            PlazaError::InvalidPrivateKey("private key must be 0x-prefixed hex".to_string())
        })?;

        let chain = Chain::from_testnet_flag(testnet);
        let signer = PrivateKeySigner::from_str(raw_key)
            .map_err(|e| PlazaError::InvalidPrivateKey(e.to_string()))?
            .with_chain_id(Some(chain.id_u64()));

        let address = signer.address().to_checksum(None);
        let client = Arc::new(LocalWalletClient {
            signer,
            address: address.clone(),
            chain,
        });

        Ok(Self {
            chain,
            address,
            client,
        })
    }
}

#[async_trait]
impl WalletAdapter for PrivateKeyAdapter {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        self.client.sign_raw(message.as_bytes()).await
    }

    fn wallet_client(&self) -> Arc<dyn WalletClient> {
        self.client.clone()
    }
}

/// Signing transport bound to a locally-held key
pub struct LocalWalletClient {
    signer: PrivateKeySigner,
    address: String,
    chain: Chain,
}

impl LocalWalletClient {
    async fn sign_raw(&self, message: &[u8]) -> Result<String> {
        let signature = self
            .signer
            .sign_message(message)
            .await
            .map_err(|e| PlazaError::Signing(format!("local signer failed: {e}")))?;

        // alloy's Signature::as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}

#[async_trait]
impl WalletClient for LocalWalletClient {
    fn account(&self) -> Option<Account> {
        Some(Account::local(&self.address))
    }

    fn address(&self) -> Option<String> {
        Some(self.address.clone())
    }

    fn chain_id(&self) -> Option<u64> {
        Some(self.chain.id_u64())
    }

    async fn sign_message(&self, _account: &Account, message: &str) -> Result<String> {
        self.sign_raw(message.as_bytes()).await
    }
}
