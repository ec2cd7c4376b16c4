//! Network identification for the reNFT deployments.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, address};
use serde::{Deserialize, Serialize};

/// Azrael deployment on Ethereum mainnet.
pub const AZRAEL_MAINNET_ADDRESS: Address = address!("94d8f036a0fbc216bb532d33bdf6564157af0cd7");

/// Public RPC endpoint used by [`Renft::mainnet`](crate::Renft::mainnet).
pub const MAINNET_RPC_URL: &str = "https://eth.llamarpc.com";

/// Public RPC endpoint used by [`Renft::avalanche`](crate::Renft::avalanche).
pub const AVALANCHE_RPC_URL: &str = "https://api.avax.network/ext/bc/C/rpc";

/// The EVM network the client is connected to.
///
/// This is used to resolve network-specific contract addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// Avalanche C-Chain.
    Avalanche,
    /// Custom network with no known deployments.
    Custom,
}

impl Network {
    /// Returns the EIP-155 chain ID, if known.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Network::Mainnet => Some(1),
            Network::Avalanche => Some(43114),
            Network::Custom => None,
        }
    }

    /// Returns the default public RPC endpoint, if any.
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            Network::Mainnet => Some(MAINNET_RPC_URL),
            Network::Avalanche => Some(AVALANCHE_RPC_URL),
            Network::Custom => None,
        }
    }

    /// Returns the known Azrael deployment on this network.
    pub fn azrael_address(&self) -> Option<Address> {
        match self {
            Network::Mainnet => Some(AZRAEL_MAINNET_ADDRESS),
            Network::Avalanche | Network::Custom => None,
        }
    }

    /// Returns the network identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Avalanche => "avalanche",
            Network::Custom => "custom",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Network::Mainnet),
            "avalanche" | "avax" => Ok(Network::Avalanche),
            "custom" => Ok(Network::Custom),
            other => Err(crate::error::Error::Config(format!(
                "unknown network '{other}'"
            ))),
        }
    }
}
