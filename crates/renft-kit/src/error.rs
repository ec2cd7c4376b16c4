//! Error types for renft-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) - Main error type, returned by every contract call
//!   - [`ParsePriceError`] - Invalid rent or collateral price
//!   - [`ParsePaymentTokenError`] - Unknown payment token
//!   - [`ParseAddressError`] - Invalid Ethereum address
//!   - [`ParseUintError`] - Invalid token ID, lending ID or amount
//!   - [`SignerError`] - Private key loading failures
//!
//! Failures raised by the node or the contract (network errors, reverts) are
//! passed through as [`Error::Transport`] without further classification.
//!
//! # Example
//!
//! ```rust,no_run
//! use renft_kit::*;
//!
//! # async fn example(azrael: Azrael) -> Result<(), Error> {
//! match azrael.stop_lending(["0xabc"], [1u64], [7u64]).await {
//!     Ok(pending) => println!("sent {}", pending.tx_hash()),
//!     Err(Error::ParseAddress(e)) => println!("bad input: {e}"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use alloy::providers::PendingTransactionError;
use alloy::transports::TransportError;
use alloy_primitives::TxHash;
use thiserror::Error;

use crate::types::Network;

/// Error parsing a packed price.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParsePriceError {
    #[error("Price is empty")]
    Empty,

    #[error("Price '{0}' is negative")]
    Negative(String),

    #[error("Invalid number in price: '{0}'")]
    InvalidNumber(String),

    #[error("Price '{0}' has more than 4 decimal places")]
    TooManyDecimals(String),

    #[error("Price '{0}' is too high (max 9999.9999)")]
    TooHigh(String),

    #[error("Price '{0}' is too low (min 0.0001)")]
    TooLow(String),
}

/// Error parsing a payment token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParsePaymentTokenError {
    #[error("Unknown payment token '{0}'")]
    UnknownSymbol(String),

    #[error("Unknown payment token discriminant {0}")]
    UnknownDiscriminant(u8),
}

/// Error parsing an Ethereum address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid address '{input}': {reason}")]
pub struct ParseAddressError {
    pub input: String,
    pub reason: String,
}

/// Error parsing a token ID, lending ID, amount or other 256-bit integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid uint256 '{input}': {reason}")]
pub struct ParseUintError {
    pub input: String,
    pub reason: String,
}

/// Error loading a signing key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Environment variable {0} is not set")]
    MissingEnv(String),
}

/// Main error type for renft-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Argument shaping ───
    #[error(transparent)]
    ParsePrice(#[from] ParsePriceError),

    #[error(transparent)]
    ParsePaymentToken(#[from] ParsePaymentTokenError),

    #[error(transparent)]
    ParseAddress(#[from] ParseAddressError),

    #[error(transparent)]
    ParseUint(#[from] ParseUintError),

    #[error("Length mismatch: `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    // ─── Configuration ───
    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error("No signer configured. Use .signer() or .private_key() on RenftBuilder.")]
    NoSigner,

    #[error("No {contract} deployment known for network {network}; pass an address explicitly")]
    NoDeployment {
        contract: &'static str,
        network: Network,
    },

    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // ─── Submission ───
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] PendingTransactionError),

    #[error("Transaction {0} has no provider attached and cannot be watched")]
    NotWatchable(TxHash),
}
