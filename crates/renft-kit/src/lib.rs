//! Typed Rust clients for the reNFT NFT rental contracts.
//!
//! **renft-kit** wraps the two reNFT rental contracts:
//!
//! - [`Azrael`] - collateralised rentals
//! - [`Whoopi`] - collateral-free rentals with revenue share and upfront fees
//!
//! Each wrapper method shapes its arguments (address and integer coercion,
//! price packing, batching) and submits exactly one transaction.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use renft_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), renft_kit::Error> {
//!     // Configure once
//!     let renft = Renft::mainnet()
//!         .private_key("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")?
//!         .build()?;
//!
//!     // Lend two NFTs for WETH at 1.5/day with 10 WETH collateral
//!     let pending = renft
//!         .azrael()?
//!         .lend(
//!             ["0x9d0b3a9e6d66e0d7d3e2bc2e8f8f0b5b8b8e8f8f"; 2],
//!             ["1", "2"],
//!             [1u64, 1],
//!             [30, 30],
//!             ["1.5", "1.5"],
//!             ["10", "10"],
//!             [PaymentToken::Weth, PaymentToken::Weth],
//!         )
//!         .await?;
//!     println!("lend tx: {}", pending.tx_hash());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Argument Types
//!
//! Wrapper methods accept anything that converts into the on-chain type:
//!
//! - addresses: [`Address`](alloy_primitives::Address), `&str`, `String`
//!   (case-insensitive, no checksum enforcement)
//! - token ids, lending ids and amounts: `U256`, `u64`, `u128`, decimal or
//!   `0x` hex strings
//! - prices: [`Price`], `f64`, `&str` with at most four decimals
//!
//! ```
//! use renft_kit::{PaymentToken, Price};
//!
//! let price: Price = "12.5".parse().unwrap();
//! assert_eq!(price.pack().as_slice(), &[0x00, 0x0c, 0x13, 0x88]);
//!
//! let token: PaymentToken = "usdc".parse().unwrap();
//! assert_eq!(u8::from(token), 3);
//! ```

pub mod abi;
mod batch;
pub mod client;
pub mod contracts;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{
    Error, ParseAddressError, ParsePaymentTokenError, ParsePriceError, ParseUintError,
    SignerError,
};
pub use types::*;

// Re-export client types
pub use client::{
    EnvSigner, InMemorySigner, PendingTx, ProviderSubmitter, Renft, RenftBuilder, Signer,
    SubmitFuture, Submitter,
};

// Re-export contract types
pub use contracts::{Azrael, CallOptions, ContractCall, Whoopi};
