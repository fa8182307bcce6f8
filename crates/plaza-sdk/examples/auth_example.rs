/*
[INPUT]:  Wallet private key and Plaza API endpoint
[OUTPUT]: Authenticated request headers for API access
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use std::sync::Arc;

use plaza_sdk::{AuthManager, PlazaClient, PrivateKeyAdapter, WalletAdapter};

/// Example: Authentication flow
///
/// 1. Create HTTP client
/// 2. Create a private key adapter for the target network
/// 3. Run one nonce/sign cycle and print the resulting header bundle
#[tokio::main]
async fn main() {
    println!("=== Plaza Authentication Example ===\n");

    let client = match PlazaClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // Use PLAZA_PRIVATE_KEY in a real integration; this well-known key is
    // for demonstration only.
    let private_key = std::env::var("PLAZA_PRIVATE_KEY").unwrap_or_else(|_| {
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string()
    });

    let adapter = match PrivateKeyAdapter::new(&private_key, true) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Failed to create adapter: {}", e);
            return;
        }
    };
    println!("✓ Wallet adapter created");
    println!("  Address:  {}", adapter.address());
    println!("  Chain id: {}", adapter.chain().id());

    let manager = AuthManager::new(client, Arc::new(adapter));

    // Each call runs a full nonce/sign cycle against the live API.
    match manager.get_auth_headers().await {
        Ok(headers) => {
            println!("\n✓ Header bundle assembled");
            println!("  x-wallet-address: {}", headers.wallet_address);
            println!("  x-signature:      {}...", &headers.signature[..18]);
            println!("  x-message:        {}", headers.message);
            println!("  x-timestamp:      {}", headers.timestamp);
            println!("  x-chain-id:       {}", headers.chain_id);
        }
        Err(e) => {
            eprintln!("\nAuthentication failed: {}", e);
            eprintln!("(expected when no API is reachable from this machine)");
        }
    }
}
