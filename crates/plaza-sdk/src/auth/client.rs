/*
[INPUT]:  Externally-owned signing transports (browser wallets, remote signers)
[OUTPUT]: Account descriptors and delegated signatures
[POS]:    Auth layer - wallet client abstraction
[UPDATE]: When adding new transport capabilities or changing the account model
*/

use async_trait::async_trait;

use crate::http::{PlazaError, Result};

/// How a signing account is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Key material lives in-process.
    Local,
    /// Key material lives outside the process (extension, remote signer).
    Remote,
}

/// Minimal signer descriptor passed to a [`WalletClient`] when signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: String,
    pub kind: AccountKind,
}

impl Account {
    pub fn local(address: &str) -> Self {
        Self {
            address: address.to_string(),
            kind: AccountKind::Local,
        }
    }

    pub fn remote(address: &str) -> Self {
        Self {
            address: address.to_string(),
            kind: AccountKind::Remote,
        }
    }
}

/// Trait for an externally-owned signing transport
///
/// Implement this for whatever actually holds the keys: a browser wallet
/// bridge, a remote signer service, a hardware device. The SDK reads
/// `account()`/`address()`/`chain_id()` once at adapter construction and
/// delegates every signature to `sign_message`.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// The client's own account object, when it owns one.
    fn account(&self) -> Option<Account>;

    /// A resolvable address, for clients that expose one without a full
    /// account object.
    fn address(&self) -> Option<String>;

    /// Numeric chain id the client is connected to.
    fn chain_id(&self) -> Option<u64>;

    /// Sign a message in the context of `account` and return the signature.
    ///
    /// May suspend indefinitely pending out-of-process user approval.
    async fn sign_message(&self, account: &Account, message: &str) -> Result<String>;
}

/// Mock wallet client for testing
///
/// Returns a predetermined signature, and can be configured to miss an
/// address or chain id, or to decline signing.
#[derive(Debug, Clone)]
pub struct MockWalletClient {
    account: Option<Account>,
    address: Option<String>,
    chain_id: Option<u64>,
    signature: String,
    declines: bool,
}

impl MockWalletClient {
    /// Create a mock client with a resolvable address and chain id
    pub fn new(address: &str, chain_id: u64, signature: &str) -> Self {
        Self {
            account: None,
            address: Some(address.to_string()),
            chain_id: Some(chain_id),
            signature: signature.to_string(),
            declines: false,
        }
    }

    /// Attach a full account object to the client
    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Drop the resolvable address (construction must then fail)
    pub fn without_address(mut self) -> Self {
        self.account = None;
        self.address = None;
        self
    }

    /// Drop the chain id (construction must then fail)
    pub fn without_chain_id(mut self) -> Self {
        self.chain_id = None;
        self
    }

    /// Make every sign request fail, simulating a user decline
    pub fn declining(mut self) -> Self {
        self.declines = true;
        self
    }
}

#[async_trait]
impl WalletClient for MockWalletClient {
    fn account(&self) -> Option<Account> {
        self.account.clone()
    }

    fn address(&self) -> Option<String> {
        self.address.clone()
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    async fn sign_message(&self, _account: &Account, _message: &str) -> Result<String> {
        if self.declines {
            return Err(PlazaError::Signing("user declined the request".to_string()));
        }
        Ok(self.signature.clone())
    }
}
