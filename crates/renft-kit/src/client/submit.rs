//! Transaction submission.
//!
//! [`Submitter`] is the seam between the contract wrappers and the chain.
//! The wrappers shape a call into a [`TransactionRequest`] and hand it to a
//! submitter, which signs and broadcasts it and returns a [`PendingTx`].
//! Nothing here waits for confirmation or retries; errors raised by the
//! transport are returned unchanged.

use std::future::Future;
use std::pin::Pin;

use alloy::network::{Ethereum, TransactionBuilder};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy_primitives::{Address, TxHash};
use tracing::debug;

use crate::error::Error;

/// Future returned by [`Submitter::submit`].
pub type SubmitFuture<'a> = Pin<Box<dyn Future<Output = Result<PendingTx, Error>> + Send + 'a>>;

// ============================================================================
// Submitter Trait
// ============================================================================

/// Trait for broadcasting shaped contract calls.
///
/// Implemented by [`ProviderSubmitter`] for real RPC endpoints. Custom
/// implementations can route transactions elsewhere (a multisig proposer, a
/// relayer, a test recorder).
///
/// # Example Implementation
///
/// ```rust,ignore
/// use renft_kit::{PendingTx, SubmitFuture, Submitter};
///
/// struct DryRun;
///
/// impl Submitter for DryRun {
///     fn sender(&self) -> Option<Address> {
///         None
///     }
///
///     fn submit(&self, tx: TransactionRequest) -> SubmitFuture<'_> {
///         Box::pin(async move {
///             println!("{:?}", tx.input.input());
///             Ok(PendingTx::from_hash(TxHash::ZERO))
///         })
///     }
/// }
/// ```
pub trait Submitter: Send + Sync {
    /// The address transactions are sent from, if known.
    fn sender(&self) -> Option<Address>;

    /// Sign and broadcast a transaction.
    fn submit(&self, tx: TransactionRequest) -> SubmitFuture<'_>;
}

// ============================================================================
// ProviderSubmitter
// ============================================================================

/// Submitter backed by an alloy provider with a wallet attached.
#[derive(Clone)]
pub struct ProviderSubmitter {
    provider: DynProvider,
    sender: Option<Address>,
}

impl ProviderSubmitter {
    /// Wrap a provider. `sender` is the wallet's default signer address;
    /// without one every submission fails with [`Error::NoSigner`].
    pub fn new(provider: DynProvider, sender: Option<Address>) -> Self {
        Self { provider, sender }
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl Submitter for ProviderSubmitter {
    fn sender(&self) -> Option<Address> {
        self.sender
    }

    fn submit(&self, tx: TransactionRequest) -> SubmitFuture<'_> {
        Box::pin(async move {
            let from = self.sender.ok_or(Error::NoSigner)?;
            let pending = self.provider.send_transaction(tx.with_from(from)).await?;
            debug!(tx_hash = %pending.tx_hash(), "transaction broadcast");
            Ok(PendingTx::new(pending))
        })
    }
}

impl std::fmt::Debug for ProviderSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSubmitter")
            .field("sender", &self.sender)
            .finish()
    }
}

// ============================================================================
// PendingTx
// ============================================================================

/// Handle to a broadcast transaction.
///
/// Confirmation policy belongs to the caller: use [`into_inner`] for alloy's
/// full watcher API, or [`get_receipt`] for a plain wait.
///
/// [`into_inner`]: PendingTx::into_inner
/// [`get_receipt`]: PendingTx::get_receipt
pub struct PendingTx {
    tx_hash: TxHash,
    watcher: Option<PendingTransactionBuilder<Ethereum>>,
}

impl PendingTx {
    /// Wrap an alloy pending transaction.
    pub fn new(watcher: PendingTransactionBuilder<Ethereum>) -> Self {
        Self {
            tx_hash: *watcher.tx_hash(),
            watcher: Some(watcher),
        }
    }

    /// A handle that only knows its hash, for submitters without a provider.
    pub fn from_hash(tx_hash: TxHash) -> Self {
        Self {
            tx_hash,
            watcher: None,
        }
    }

    /// The transaction hash.
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// The alloy watcher, when backed by a provider.
    pub fn into_inner(self) -> Option<PendingTransactionBuilder<Ethereum>> {
        self.watcher
    }

    /// Wait for the receipt using alloy's default polling.
    pub async fn get_receipt(self) -> Result<TransactionReceipt, Error> {
        let watcher = self.watcher.ok_or(Error::NotWatchable(self.tx_hash))?;
        Ok(watcher.get_receipt().await?)
    }
}

impl std::fmt::Debug for PendingTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTx")
            .field("tx_hash", &self.tx_hash)
            .field("watchable", &self.watcher.is_some())
            .finish()
    }
}
