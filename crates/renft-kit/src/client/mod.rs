//! Client module for submitting rental transactions.
//!
//! This module provides the core client infrastructure:
//!
//! - [`Renft`] - The main client, holding the network, submitter and
//!   contract addresses
//! - [`RenftBuilder`] - Fluent builder for configuring the client
//! - [`Submitter`] - The seam between contract wrappers and the chain
//!
//! # Signers
//!
//! | Signer | Use Case |
//! |--------|----------|
//! | [`InMemorySigner`] | Scripts and bots with a private key in memory |
//! | [`EnvSigner`] | CI/CD via the `RENFT_PRIVATE_KEY` env var |

mod renft;
mod signer;
mod submit;

pub use renft::{
    AZRAEL_ADDRESS_ENV, NETWORK_ENV, RPC_URL_ENV, Renft, RenftBuilder, WHOOPI_ADDRESS_ENV,
};
pub use signer::{EnvSigner, InMemorySigner, PRIVATE_KEY_ENV, Signer};
pub use submit::{PendingTx, ProviderSubmitter, SubmitFuture, Submitter};

#[cfg(test)]
pub(crate) use submit::testing;
