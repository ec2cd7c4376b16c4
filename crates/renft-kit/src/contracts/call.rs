//! Builder for a single contract call.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use alloy::network::TransactionBuilder;
use alloy::rpc::types::TransactionRequest;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use crate::client::{PendingTx, Submitter};
use crate::error::Error;

/// Transaction overrides for a contract call.
///
/// Unset fields are left for the provider to fill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Native value attached to the call (for payable entry points).
    pub value: Option<U256>,
    /// Gas limit.
    pub gas: Option<u64>,
    /// Legacy gas price in wei.
    pub gas_price: Option<u128>,
    /// Explicit nonce.
    pub nonce: Option<u64>,
}

impl CallOptions {
    fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(value) = self.value {
            tx.set_value(value);
        }
        if let Some(gas) = self.gas {
            tx.set_gas_limit(gas);
        }
        if let Some(gas_price) = self.gas_price {
            tx.set_gas_price(gas_price);
        }
        if let Some(nonce) = self.nonce {
            tx.set_nonce(nonce);
        }
        tx
    }
}

/// A shaped contract call, sent when awaited.
///
/// Argument shaping errors are held until the call is awaited, so option
/// setters can be chained without intermediate `?`.
///
/// ```rust,no_run
/// # use renft_kit::*;
/// # async fn example(azrael: Azrael) -> Result<(), Error> {
/// let pending = azrael
///     .rent(["0x94d8f036a0fbc216bb532d33bdf6564157af0cd7"], [1u64], [12u64], [3])
///     .value(alloy_primitives::U256::from(10u64).pow(alloy_primitives::U256::from(17)))
///     .gas(400_000)
///     .await?;
/// println!("rent tx: {}", pending.tx_hash());
/// # Ok(())
/// # }
/// ```
pub struct ContractCall<C> {
    submitter: Arc<dyn Submitter>,
    contract: Address,
    pub(crate) call: Result<C, Error>,
    options: CallOptions,
}

impl<C: SolCall> ContractCall<C> {
    pub(crate) fn new(
        submitter: Arc<dyn Submitter>,
        contract: Address,
        call: Result<C, Error>,
    ) -> Self {
        Self {
            submitter,
            contract,
            call,
            options: CallOptions::default(),
        }
    }

    /// Attach native value (wei) to the call.
    pub fn value(mut self, value: U256) -> Self {
        self.options.value = Some(value);
        self
    }

    /// Set the gas limit.
    pub fn gas(mut self, gas: u64) -> Self {
        self.options.gas = Some(gas);
        self
    }

    /// Set a legacy gas price in wei.
    pub fn gas_price(mut self, gas_price: u128) -> Self {
        self.options.gas_price = Some(gas_price);
        self
    }

    /// Set an explicit nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.options.nonce = Some(nonce);
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// The contract the call targets.
    pub fn contract(&self) -> Address {
        self.contract
    }

    /// The shaped call arguments, or the error that shaping produced.
    pub fn call(&self) -> Result<&C, &Error> {
        self.call.as_ref()
    }

    /// ABI-encoded calldata (selector followed by arguments).
    pub fn calldata(&self) -> Result<Bytes, &Error> {
        self.call.as_ref().map(|c| Bytes::from(c.abi_encode()))
    }

    /// Build the transaction request without sending it.
    pub fn into_request(self) -> Result<TransactionRequest, Error> {
        let call = self.call?;
        let tx = TransactionRequest::default()
            .with_to(self.contract)
            .with_input(call.abi_encode());
        Ok(self.options.apply(tx))
    }
}

impl<C> IntoFuture for ContractCall<C>
where
    C: SolCall + Send + 'static,
{
    type Output = Result<PendingTx, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let submitter = self.submitter.clone();
            let contract = self.contract;
            let tx = self.into_request()?;

            debug!(%contract, method = C::SIGNATURE, "submitting contract call");
            let pending = submitter.submit(tx).await?;
            info!(%contract, method = C::SIGNATURE, tx_hash = %pending.tx_hash(), "contract call submitted");

            Ok(pending)
        })
    }
}

impl<C> std::fmt::Debug for ContractCall<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractCall")
            .field("contract", &self.contract)
            .field("shaped", &self.call.is_ok())
            .field("options", &self.options)
            .finish()
    }
}
