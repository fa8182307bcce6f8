/*
[INPUT]:  Externally-constructed wallet client (browser wallet, remote signer)
[OUTPUT]: Signed messages and cached wallet identity
[POS]:    Auth layer - external wallet implementation
[UPDATE]: When delegation rules or account resolution change
*/

use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::{Account, WalletAdapter, WalletClient};
use crate::http::{PlazaError, Result};
use crate::types::Chain;

/// Adapter delegating signatures to an externally-owned [`WalletClient`]
///
/// Address and chain are resolved once at construction and cached for the
/// adapter's lifetime. Signing may suspend indefinitely pending
/// out-of-process user approval; bound it with
/// [`AuthManager::with_sign_timeout`](crate::auth::AuthManager::with_sign_timeout)
/// if needed.
pub struct ExternalWalletAdapter {
    client: Arc<dyn WalletClient>,
    chain: Chain,
    address: String,
}

impl std::fmt::Debug for ExternalWalletAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalWalletAdapter")
            .field("chain", &self.chain)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl ExternalWalletAdapter {
    /// Wrap an external wallet client
    ///
    /// Fails with [`PlazaError::AdapterUnavailable`] when the client exposes
    /// no resolvable account address or chain id, or when the chain id is
    /// not a recognized deployment.
    pub fn new(client: Arc<dyn WalletClient>) -> Result<Self> {
        let address = client
            .account()
            .map(|account| account.address)
            .or_else(|| client.address())
            .ok_or_else(|| {
                PlazaError::AdapterUnavailable(
                    "wallet client exposes no account address".to_string(),
                )
            })?;

        let chain_id = client.chain_id().ok_or_else(|| {
            PlazaError::AdapterUnavailable("wallet client exposes no chain id".to_string())
        })?;
        let chain = Chain::from_id(chain_id).ok_or_else(|| {
            PlazaError::AdapterUnavailable(format!("unrecognized chain id {chain_id}"))
        })?;

        Ok(Self {
            client,
            chain,
            address,
        })
    }
}

#[async_trait]
impl WalletAdapter for ExternalWalletAdapter {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        // Clients without an account object of their own get a synthesized
        // remote descriptor over the cached address.
        let account = self
            .client
            .account()
            .unwrap_or_else(|| Account::remote(&self.address));

        self.client.sign_message(&account, message).await
    }

    fn wallet_client(&self) -> Arc<dyn WalletClient> {
        self.client.clone()
    }
}
