/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Plaza SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Account,
    AccountKind,
    AuthHeaders,
    AuthManager,
    ExternalWalletAdapter,
    MockWalletAdapter,
    MockWalletClient,
    PrivateKeyAdapter,
    WalletAdapter,
    WalletClient,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    PlazaClient,
    PlazaError,
    Result,
};

// Re-export all types
pub use types::*;
