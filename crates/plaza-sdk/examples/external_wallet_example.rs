/*
[INPUT]:  An externally-owned signing client
[OUTPUT]: Authenticated request headers signed out-of-process
[POS]:    Examples - external wallet integration demonstration
[UPDATE]: When the WalletClient contract changes
*/

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use plaza_sdk::{
    Account, AuthManager, ExternalWalletAdapter, PlazaClient, PrivateKeyAdapter, Result,
    WalletAdapter, WalletClient,
};

/// A stand-in for a browser wallet bridge or remote signer service.
///
/// Here it wraps a local key so the example is self-contained; a real
/// integration forwards `sign_message` to the external process and waits
/// for user approval.
struct DemoWalletClient {
    inner: PrivateKeyAdapter,
}

#[async_trait]
impl WalletClient for DemoWalletClient {
    fn account(&self) -> Option<Account> {
        // No account object of its own: the adapter synthesizes a remote
        // descriptor from the resolvable address below.
        None
    }

    fn address(&self) -> Option<String> {
        Some(self.inner.address().to_string())
    }

    fn chain_id(&self) -> Option<u64> {
        Some(self.inner.chain().id_u64())
    }

    async fn sign_message(&self, _account: &Account, message: &str) -> Result<String> {
        self.inner.sign_message(message).await
    }
}

#[tokio::main]
async fn main() {
    println!("=== Plaza External Wallet Example ===\n");

    let key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    let client = Arc::new(DemoWalletClient {
        inner: PrivateKeyAdapter::new(key, true).expect("demo key is valid"),
    });

    let adapter = match ExternalWalletAdapter::new(client) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Failed to wrap wallet client: {}", e);
            return;
        }
    };
    println!("✓ External wallet adapter created");
    println!("  Address:  {}", adapter.address());
    println!("  Chain id: {}", adapter.chain().id());

    let http = PlazaClient::new().expect("default client config is valid");

    // External signing waits on a human; bound it rather than hanging
    // forever.
    let manager =
        AuthManager::new(http, Arc::new(adapter)).with_sign_timeout(Duration::from_secs(120));

    match manager.get_auth_headers().await {
        Ok(headers) => {
            println!("\n✓ Header bundle assembled");
            println!("  x-wallet-address: {}", headers.wallet_address);
            println!("  x-chain-id:       {}", headers.chain_id);
        }
        Err(e) => {
            eprintln!("\nAuthentication failed: {}", e);
            eprintln!("(expected when no API is reachable from this machine)");
        }
    }
}
