//! Whoopi: collateral-free rentals with revenue share.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::abi::IWhoopi;
use crate::batch::check_lengths;
use crate::client::Submitter;
use crate::error::Error;
use crate::types::{IntoAddress, IntoUint256, PaymentToken, addresses, uint256s};

use super::call::ContractCall;

// =============================================================================
// Whoopi
// =============================================================================

/// Client for the Whoopi rental contract.
///
/// Unlike Azrael, a Whoopi lending carries no collateral. The lender may
/// instead ask for an upfront fee and split the rental revenue between a
/// set of beneficiaries.
#[derive(Clone)]
pub struct Whoopi {
    submitter: Arc<dyn Submitter>,
    address: Address,
}

impl Whoopi {
    /// Create a client for the contract at `address`.
    pub fn new(submitter: Arc<dyn Submitter>, address: Address) -> Self {
        Self { submitter, address }
    }

    /// The contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Lend several tokens of one NFT contract.
    ///
    /// `rev_share_beneficiaries[i]` and `rev_share_portions[i]` describe how
    /// the revenue of the `i`-th lending is split. An empty
    /// `upfront_rent_fees` column charges no upfront fee on any lending.
    /// Every lending is open to any renter unless
    /// [`allowed_renters`](ContractCall::allowed_renters) is set on the
    /// returned call.
    ///
    /// ```rust,no_run
    /// # use renft_kit::*;
    /// # async fn example(whoopi: Whoopi) -> Result<(), Error> {
    /// let lender = "0x1111111111111111111111111111111111111111";
    /// let pending = whoopi
    ///     .lend(
    ///         "0x9d0b3a9e6d66e0d7d3e2bc2e8f8f0b5b8b8e8f8f",
    ///         [1u64, 2],
    ///         [0u64, 0],
    ///         [vec![lender], vec![lender]],
    ///         [vec![100u8], vec![100u8]],
    ///         [7, 7],
    ///         [PaymentToken::Usdc, PaymentToken::Usdc],
    ///     )
    ///     .allowed_renters([vec!["0x2222222222222222222222222222222222222222"], vec![]])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn lend<B, P>(
        &self,
        nft_address: impl IntoAddress,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        upfront_rent_fees: impl IntoIterator<Item = impl IntoUint256>,
        rev_share_beneficiaries: impl IntoIterator<Item = B>,
        rev_share_portions: impl IntoIterator<Item = P>,
        max_rent_durations: impl IntoIterator<Item = u8>,
        payment_tokens: impl IntoIterator<Item = PaymentToken>,
    ) -> ContractCall<IWhoopi::lendCall>
    where
        B: IntoIterator,
        B::Item: IntoAddress,
        P: IntoIterator<Item = u8>,
    {
        let call = (|| -> Result<_, Error> {
            let nft = nft_address.into_address()?;
            let token_ids = uint256s(token_id)?;
            let fees = uint256s(upfront_rent_fees)?;
            let beneficiaries = rev_share_beneficiaries
                .into_iter()
                .map(addresses)
                .collect::<Result<Vec<_>, _>>()?;
            let portions: Vec<Vec<u8>> = rev_share_portions
                .into_iter()
                .map(|p| p.into_iter().collect())
                .collect();
            let durations: Vec<u8> = max_rent_durations.into_iter().collect();
            let tokens: Vec<u8> = payment_tokens.into_iter().map(u8::from).collect();

            let n = check_lengths(&[
                ("token_id", token_ids.len()),
                ("rev_share_beneficiaries", beneficiaries.len()),
                ("rev_share_portions", portions.len()),
                ("max_rent_durations", durations.len()),
                ("payment_tokens", tokens.len()),
            ])?;
            // No fees given means no upfront fee on any lending.
            let fees = if fees.is_empty() {
                vec![U256::ZERO; n]
            } else {
                check_lengths(&[("token_id", n), ("upfront_rent_fees", fees.len())])?;
                fees
            };

            let rev_shares = beneficiaries
                .into_iter()
                .zip(portions)
                .map(|(beneficiaries, portions)| {
                    check_lengths(&[
                        ("rev_share_beneficiaries", beneficiaries.len()),
                        ("rev_share_portions", portions.len()),
                    ])?;
                    Ok(IWhoopi::RevShare {
                        beneficiaries,
                        portions,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(IWhoopi::lendCall {
                cd: IWhoopi::CallData {
                    nft,
                    tokenIds: token_ids,
                    lendingIds: vec![U256::ZERO; n],
                },
                upfrontRentFees: fees,
                allowedRenters: vec![Vec::new(); n],
                revShares: rev_shares,
                maxRentDurations: durations,
                paymentTokens: tokens,
            })
        })();
        self.call(call)
    }

    /// Rent lendings for `rent_durations` days each. Rows are sent in the
    /// order given.
    pub fn rent(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
        rent_durations: impl IntoIterator<Item = u8>,
    ) -> ContractCall<IWhoopi::rentCall> {
        let call = (|| -> Result<_, Error> {
            let nfts = addresses(nft_address)?;
            let token_ids = uint256s(token_id)?;
            let lending_ids = uint256s(lending_id)?;
            let durations: Vec<u8> = rent_durations.into_iter().collect();

            check_lengths(&[
                ("nft_address", nfts.len()),
                ("token_id", token_ids.len()),
                ("lending_id", lending_ids.len()),
                ("rent_durations", durations.len()),
            ])?;

            Ok(IWhoopi::rentCall {
                nfts,
                tokenIds: token_ids,
                lendingIds: lending_ids,
                rentDurations: durations,
            })
        })();
        self.call(call)
    }

    /// End rentals (`stopRent`). Only the reNFT operator may call this.
    pub fn stop_rent(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IWhoopi::stopRentCall> {
        let call = shape_ids(nft_address, token_id, lending_id).map(
            |(nfts, token_ids, lending_ids)| IWhoopi::stopRentCall {
                nfts,
                tokenIds: token_ids,
                lendingIds: lending_ids,
            },
        );
        self.call(call)
    }

    /// Withdraw lendings (`stopLend`).
    pub fn stop_lending(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IWhoopi::stopLendCall> {
        let call = shape_ids(nft_address, token_id, lending_id).map(
            |(nfts, token_ids, lending_ids)| IWhoopi::stopLendCall {
                nfts,
                tokenIds: token_ids,
                lendingIds: lending_ids,
            },
        );
        self.call(call)
    }

    /// Pay renters of the given lendings their share.
    pub fn pay(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
        renter_address: impl IntoIterator<Item = impl IntoAddress>,
        amount_to_pay: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IWhoopi::payCall> {
        let call = (|| -> Result<_, Error> {
            let (nfts, token_ids, lending_ids) = shape_ids(nft_address, token_id, lending_id)?;
            let renters = addresses(renter_address)?;
            let amounts = uint256s(amount_to_pay)?;

            check_lengths(&[
                ("nft_address", nfts.len()),
                ("renter_address", renters.len()),
                ("amount_to_pay", amounts.len()),
            ])?;

            Ok(IWhoopi::payCall {
                nfts,
                tokenIds: token_ids,
                lendingIds: lending_ids,
                renters,
                amountsToPay: amounts,
            })
        })();
        self.call(call)
    }

    fn call<C: SolCall>(&self, call: Result<C, Error>) -> ContractCall<C> {
        ContractCall::new(self.submitter.clone(), self.address, call)
    }
}

impl std::fmt::Debug for Whoopi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Whoopi")
            .field("address", &self.address)
            .finish()
    }
}

impl ContractCall<IWhoopi::lendCall> {
    /// Restrict who may rent each lending. An empty list leaves that
    /// lending open to anyone.
    ///
    /// Must have one entry per token id.
    pub fn allowed_renters<R>(mut self, allowed_renters: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator,
        R::Item: IntoAddress,
    {
        self.call = self.call.and_then(|mut call| {
            let renters = allowed_renters
                .into_iter()
                .map(addresses)
                .collect::<Result<Vec<_>, _>>()?;
            check_lengths(&[
                ("token_id", call.cd.tokenIds.len()),
                ("allowed_renters", renters.len()),
            ])?;
            call.allowedRenters = renters;
            Ok(call)
        });
        self
    }
}

fn shape_ids(
    nft_address: impl IntoIterator<Item = impl IntoAddress>,
    token_id: impl IntoIterator<Item = impl IntoUint256>,
    lending_id: impl IntoIterator<Item = impl IntoUint256>,
) -> Result<(Vec<Address>, Vec<U256>, Vec<U256>), Error> {
    let nfts = addresses(nft_address)?;
    let token_ids = uint256s(token_id)?;
    let lending_ids = uint256s(lending_id)?;

    check_lengths(&[
        ("nft_address", nfts.len()),
        ("token_id", token_ids.len()),
        ("lending_id", lending_ids.len()),
    ])?;

    Ok((nfts, token_ids, lending_ids))
}
