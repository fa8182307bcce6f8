/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Recognized network deployments of the Plaza API.
///
/// The chain id travels as a string on the wire (`x-chain-id` header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "8453")]
    Base,
    #[serde(rename = "84532")]
    BaseSepolia,
}

impl Chain {
    /// Select the deployment matching a testnet flag.
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Chain::BaseSepolia
        } else {
            Chain::Base
        }
    }

    /// Resolve a numeric chain id to a recognized deployment.
    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            8453 => Some(Chain::Base),
            84532 => Some(Chain::BaseSepolia),
            _ => None,
        }
    }

    /// Chain id in the string form used by the API.
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Base => "8453",
            Chain::BaseSepolia => "84532",
        }
    }

    /// Chain id as the numeric form used when binding signers.
    pub fn id_u64(&self) -> u64 {
        match self {
            Chain::Base => 8453,
            Chain::BaseSepolia => 84532,
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Chain::BaseSepolia)
    }
}
