//! Whoopi wrapper tests through the public API.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use renft_kit::abi::IWhoopi;
use renft_kit::*;

use crate::common::recording_client;

const WHOOPI: &str = "0x5c2d5f3b1a4bf7e1d5c1b4c7e7c4b5a6d3e2f1a0";
const NFT: &str = "0x7ba0c0e0f4c2aa8e8f1b1f6a8c1d6c3b7e5e4a11";
const LENDER: &str = "0x000000000000000000000000000000000000dEaD";

fn addr(s: &str) -> Address {
    s.to_lowercase().parse().unwrap()
}

#[tokio::test]
async fn test_lend_shapes_call_data_and_rev_shares() {
    let (renft, recorder) = recording_client(Network::Avalanche);
    let whoopi = renft.whoopi_at(WHOOPI).unwrap();

    whoopi
        .lend(
            NFT,
            ["1", "2", "3"],
            [0u64, 5, 0],
            [vec![LENDER], vec![LENDER, NFT], vec![]],
            [vec![100u8], vec![50u8, 50], vec![]],
            [1, 2, 3],
            [PaymentToken::Usdc, PaymentToken::Usdt, PaymentToken::Rent],
        )
        .await
        .unwrap();

    let sent = recorder.last();
    assert_eq!(sent.to, Some(addr(WHOOPI)));
    let call = IWhoopi::lendCall::abi_decode(&sent.input).unwrap();

    assert_eq!(call.cd.nft, addr(NFT));
    assert_eq!(
        call.cd.tokenIds,
        vec![U256::from(1), U256::from(2), U256::from(3)]
    );
    assert_eq!(call.cd.lendingIds, vec![U256::ZERO; 3]);
    assert_eq!(call.allowedRenters, vec![Vec::<Address>::new(); 3]);
    assert_eq!(call.upfrontRentFees[1], U256::from(5));
    assert_eq!(call.revShares[0].beneficiaries, vec![addr(LENDER)]);
    assert_eq!(call.revShares[1].portions, vec![50, 50]);
    assert!(call.revShares[2].beneficiaries.is_empty());
    assert_eq!(call.paymentTokens, vec![3, 4, 6]);
}

#[tokio::test]
async fn test_lend_allowed_renters_override() {
    let (renft, recorder) = recording_client(Network::Avalanche);
    renft
        .whoopi_at(WHOOPI)
        .unwrap()
        .lend(
            NFT,
            [1u64],
            [0u64],
            [[LENDER]],
            [[100u8]],
            [1],
            [PaymentToken::Weth],
        )
        .allowed_renters([[LENDER, NFT]])
        .await
        .unwrap();

    let call = IWhoopi::lendCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(call.allowedRenters, vec![vec![addr(LENDER), addr(NFT)]]);
}

#[tokio::test]
async fn test_lend_omitted_fees_are_zero() {
    let (renft, recorder) = recording_client(Network::Avalanche);
    renft
        .whoopi_at(WHOOPI)
        .unwrap()
        .lend(
            NFT,
            [7u64, 8, 9],
            [0u64; 0],
            [[LENDER], [LENDER], [LENDER]],
            [[100u8], [100u8], [100u8]],
            [1, 1, 1],
            [PaymentToken::Weth; 3],
        )
        .await
        .unwrap();

    let call = IWhoopi::lendCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(call.upfrontRentFees, vec![U256::ZERO; 3]);
    assert_eq!(call.cd.lendingIds, vec![U256::ZERO; 3]);
}

#[tokio::test]
async fn test_rent_stop_and_pay() {
    let (renft, recorder) = recording_client(Network::Avalanche);
    let whoopi = renft.whoopi_at(WHOOPI).unwrap();

    whoopi
        .rent([NFT, NFT], [2u64, 1], [20u64, 10], [4, 5])
        .await
        .unwrap();
    let rent = IWhoopi::rentCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(rent.tokenIds, vec![U256::from(2), U256::from(1)]);

    whoopi.stop_rent([NFT], [1u64], [10u64]).await.unwrap();
    let stop = IWhoopi::stopRentCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(stop.nfts, vec![addr(NFT)]);

    whoopi
        .stop_lending([NFT.to_uppercase().replace("0X", "0x")], [1u64], [10u64])
        .await
        .unwrap();
    let stop = IWhoopi::stopLendCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(stop.nfts, vec![addr(NFT)]);

    whoopi
        .pay([NFT], [1u64], [10u64], [LENDER], [U256::from(10).pow(U256::from(18))])
        .await
        .unwrap();
    let pay = IWhoopi::payCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(pay.renters, vec![addr(LENDER)]);
    assert_eq!(pay.amountsToPay, vec![U256::from(10).pow(U256::from(18))]);

    assert_eq!(recorder.sent().len(), 4);
}

#[tokio::test]
async fn test_whoopi_length_mismatch() {
    let (renft, recorder) = recording_client(Network::Avalanche);
    let err = renft
        .whoopi_at(WHOOPI)
        .unwrap()
        .lend(
            NFT,
            [1u64, 2],
            [0u64],
            [[LENDER], [LENDER]],
            [[100u8], [100u8]],
            [1, 1],
            [PaymentToken::Weth, PaymentToken::Weth],
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::LengthMismatch {
            field: "upfront_rent_fees",
            expected: 2,
            actual: 1
        }
    ));
    assert!(recorder.sent().is_empty());
}
