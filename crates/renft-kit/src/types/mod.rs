//! Core types for the reNFT rental contracts.
//!
//! Hand-rolled argument types with the exact on-chain encodings the
//! contracts expect.

mod coerce;
mod network;
mod payment;
mod price;

pub(crate) use coerce::{addresses, packed_prices, uint256s};
pub use coerce::{IntoAddress, IntoPrice, IntoUint256};
pub use network::{AVALANCHE_RPC_URL, AZRAEL_MAINNET_ADDRESS, MAINNET_RPC_URL, Network};
pub use payment::PaymentToken;
pub use price::Price;
