/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Response of `POST /v1/auth/nonce`.
///
/// `message` is the opaque single-use challenge string to be signed. The
/// server issues a fresh one per request; the client performs no validation
/// of its shape beyond presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthNonceResponse {
    pub message: String,
}
