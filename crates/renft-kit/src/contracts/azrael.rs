//! Azrael: collateralised NFT rentals.

use std::sync::Arc;

use alloy_primitives::{Address, U256};

use crate::abi::IAzrael;
use crate::batch::{batch_order, check_lengths, permute};
use crate::client::Submitter;
use crate::error::Error;
use crate::types::{
    AZRAEL_MAINNET_ADDRESS, IntoAddress, IntoPrice, IntoUint256, PaymentToken, addresses,
    packed_prices, uint256s,
};

use super::call::ContractCall;

// =============================================================================
// Azrael
// =============================================================================

/// Client for the Azrael rental contract.
///
/// Every method takes parallel columns, one entry per NFT, and submits them
/// as a single batched call. Rows are reordered so that NFTs from the same
/// contract are adjacent, which the contract relies on to batch ERC-1155
/// transfers.
///
/// # Example
///
/// ```rust,no_run
/// use renft_kit::*;
///
/// # async fn example() -> Result<(), renft_kit::Error> {
/// let renft = Renft::mainnet().private_key("0xac09...")?.build()?;
/// let azrael = renft.azrael()?;
///
/// let pending = azrael
///     .lend(
///         ["0x9d0b3a9e6d66e0d7d3e2bc2e8f8f0b5b8b8e8f8f"],
///         ["1337"],
///         [1u64],
///         [7],
///         [1.5],
///         ["100"],
///         [PaymentToken::Weth],
///     )
///     .await?;
/// println!("lend tx: {}", pending.tx_hash());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Azrael {
    submitter: Arc<dyn Submitter>,
    address: Address,
}

impl Azrael {
    /// Create a client for the contract at `address`, or at the mainnet
    /// deployment when `None`.
    pub fn new(submitter: Arc<dyn Submitter>, address: Option<Address>) -> Self {
        Self {
            submitter,
            address: address.unwrap_or(AZRAEL_MAINNET_ADDRESS),
        }
    }

    /// The contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Offer NFTs for rent.
    ///
    /// `daily_rent_price` and `nft_price` (the collateral) are packed into
    /// the contract's `bytes4` format; `max_rent_duration` is in days.
    #[allow(clippy::too_many_arguments)]
    pub fn lend(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        amount: impl IntoIterator<Item = impl IntoUint256>,
        max_rent_duration: impl IntoIterator<Item = u8>,
        daily_rent_price: impl IntoIterator<Item = impl IntoPrice>,
        nft_price: impl IntoIterator<Item = impl IntoPrice>,
        payment_token: impl IntoIterator<Item = PaymentToken>,
    ) -> ContractCall<IAzrael::lendCall> {
        let call = (|| -> Result<_, Error> {
            let nfts = addresses(nft_address)?;
            let token_ids = uint256s(token_id)?;
            let amounts = uint256s(amount)?;
            let durations: Vec<u8> = max_rent_duration.into_iter().collect();
            let daily_prices = packed_prices(daily_rent_price)?;
            let nft_prices = packed_prices(nft_price)?;
            let tokens: Vec<u8> = payment_token.into_iter().map(u8::from).collect();

            check_lengths(&[
                ("nft_address", nfts.len()),
                ("token_id", token_ids.len()),
                ("amount", amounts.len()),
                ("max_rent_duration", durations.len()),
                ("daily_rent_price", daily_prices.len()),
                ("nft_price", nft_prices.len()),
                ("payment_token", tokens.len()),
            ])?;

            let order = batch_order(&nfts, &token_ids);
            Ok(IAzrael::lendCall {
                nfts: permute(&nfts, &order),
                tokenIds: permute(&token_ids, &order),
                lendAmounts: permute(&amounts, &order),
                maxRentDurations: permute(&durations, &order),
                dailyRentPrices: permute(&daily_prices, &order),
                nftPrices: permute(&nft_prices, &order),
                paymentTokens: permute(&tokens, &order),
            })
        })();
        self.call(call)
    }

    /// Rent lendings for `rent_duration` days each.
    ///
    /// The contract takes the rent and collateral in the lending's payment
    /// token; attach native value with [`ContractCall::value`] only if the
    /// deployment expects it.
    pub fn rent(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
        rent_duration: impl IntoIterator<Item = u8>,
    ) -> ContractCall<IAzrael::rentCall> {
        let call = (|| -> Result<_, Error> {
            let nfts = addresses(nft_address)?;
            let token_ids = uint256s(token_id)?;
            let lending_ids = uint256s(lending_id)?;
            let durations: Vec<u8> = rent_duration.into_iter().collect();

            check_lengths(&[
                ("nft_address", nfts.len()),
                ("token_id", token_ids.len()),
                ("lending_id", lending_ids.len()),
                ("rent_duration", durations.len()),
            ])?;

            let order = batch_order(&nfts, &token_ids);
            Ok(IAzrael::rentCall {
                nfts: permute(&nfts, &order),
                tokenIds: permute(&token_ids, &order),
                lendingIds: permute(&lending_ids, &order),
                rentDurations: permute(&durations, &order),
            })
        })();
        self.call(call)
    }

    /// Return rented NFTs to the lender (`returnIt`).
    pub fn return_it(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IAzrael::returnItCall> {
        let call = shape_ids(nft_address, token_id, lending_id).map(|ids| {
            IAzrael::returnItCall {
                nfts: ids.nfts,
                tokenIds: ids.token_ids,
                lendingIds: ids.lending_ids,
            }
        });
        self.call(call)
    }

    /// Claim the collateral of rentals that were not returned in time.
    pub fn claim_collateral(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IAzrael::claimCollateralCall> {
        let call = shape_ids(nft_address, token_id, lending_id).map(|ids| {
            IAzrael::claimCollateralCall {
                nfts: ids.nfts,
                tokenIds: ids.token_ids,
                lendingIds: ids.lending_ids,
            }
        });
        self.call(call)
    }

    /// Withdraw NFTs that are lent but not currently rented.
    pub fn stop_lending(
        &self,
        nft_address: impl IntoIterator<Item = impl IntoAddress>,
        token_id: impl IntoIterator<Item = impl IntoUint256>,
        lending_id: impl IntoIterator<Item = impl IntoUint256>,
    ) -> ContractCall<IAzrael::stopLendingCall> {
        let call = shape_ids(nft_address, token_id, lending_id).map(|ids| {
            IAzrael::stopLendingCall {
                nfts: ids.nfts,
                tokenIds: ids.token_ids,
                lendingIds: ids.lending_ids,
            }
        });
        self.call(call)
    }

    fn call<C: alloy_sol_types::SolCall>(&self, call: Result<C, Error>) -> ContractCall<C> {
        ContractCall::new(self.submitter.clone(), self.address, call)
    }
}

impl std::fmt::Debug for Azrael {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Azrael")
            .field("address", &self.address)
            .finish()
    }
}

/// The `(nft, token id, lending id)` triple shared by the identifier-only
/// entry points, already batch-ordered.
struct LendingIds {
    nfts: Vec<Address>,
    token_ids: Vec<U256>,
    lending_ids: Vec<U256>,
}

fn shape_ids(
    nft_address: impl IntoIterator<Item = impl IntoAddress>,
    token_id: impl IntoIterator<Item = impl IntoUint256>,
    lending_id: impl IntoIterator<Item = impl IntoUint256>,
) -> Result<LendingIds, Error> {
    let nfts = addresses(nft_address)?;
    let token_ids = uint256s(token_id)?;
    let lending_ids = uint256s(lending_id)?;

    check_lengths(&[
        ("nft_address", nfts.len()),
        ("token_id", token_ids.len()),
        ("lending_id", lending_ids.len()),
    ])?;

    let order = batch_order(&nfts, &token_ids);
    Ok(LendingIds {
        nfts: permute(&nfts, &order),
        token_ids: permute(&token_ids, &order),
        lending_ids: permute(&lending_ids, &order),
    })
}
