/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/auth/nonce`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthNonceRequest {
    pub wallet_address: String,
}
