/*
[INPUT]:  Wallet identity, signature, and signed challenge
[OUTPUT]: Header bundle proving wallet identity for one API call
[POS]:    Auth layer - authenticated request header assembly
[UPDATE]: When the header contract changes
*/

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::http::{PlazaError, Result};
use crate::types::Chain;

pub const WALLET_ADDRESS_HEADER: &str = "x-wallet-address";
pub const SIGNATURE_HEADER: &str = "x-signature";
pub const MESSAGE_HEADER: &str = "x-message";
pub const TIMESTAMP_HEADER: &str = "x-timestamp";
pub const CHAIN_ID_HEADER: &str = "x-chain-id";

/// Header bundle proving wallet identity for one authenticated call
///
/// The challenge inside is single-use by server contract: assemble a fresh
/// bundle per request, never cache or reuse one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub wallet_address: String,
    pub signature: String,
    /// The exact challenge string that was signed.
    pub message: String,
    /// Unix seconds at assembly time.
    pub timestamp: i64,
    pub chain_id: String,
}

impl AuthHeaders {
    /// Assemble a bundle, stamping the current wall-clock time
    pub(crate) fn assemble(
        wallet_address: String,
        signature: String,
        message: String,
        chain: Chain,
    ) -> Self {
        Self {
            wallet_address,
            signature,
            message,
            timestamp: Utc::now().timestamp(),
            chain_id: chain.id().to_string(),
        }
    }

    /// Render the bundle as request headers
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(
            HeaderName::from_static(WALLET_ADDRESS_HEADER),
            header_value(&self.wallet_address)?,
        );
        headers.insert(
            HeaderName::from_static(SIGNATURE_HEADER),
            header_value(&self.signature)?,
        );
        headers.insert(
            HeaderName::from_static(MESSAGE_HEADER),
            header_value(&self.message)?,
        );
        headers.insert(
            HeaderName::from_static(TIMESTAMP_HEADER),
            header_value(&self.timestamp.to_string())?,
        );
        headers.insert(
            HeaderName::from_static(CHAIN_ID_HEADER),
            header_value(&self.chain_id)?,
        );
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| PlazaError::InvalidResponse(format!("value not representable as header: {e}")))
}
