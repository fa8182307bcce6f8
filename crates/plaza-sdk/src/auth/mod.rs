/*
[INPUT]:  Wallet signing material and authentication configuration
[OUTPUT]: Signed challenges and authenticated request headers
[POS]:    Auth layer - handles Plaza API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod client;
pub mod external;
pub mod headers;
pub mod manager;
pub mod private_key;
pub mod wallet;

pub use client::{Account, AccountKind, MockWalletClient, WalletClient};
pub use external::ExternalWalletAdapter;
pub use headers::AuthHeaders;
pub use manager::AuthManager;
pub use private_key::{LocalWalletClient, PrivateKeyAdapter};
pub use wallet::{MockWalletAdapter, WalletAdapter};
