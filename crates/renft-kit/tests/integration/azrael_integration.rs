//! Azrael wrapper tests through the public API.

use alloy_primitives::{Address, FixedBytes, U256};
use alloy_sol_types::SolCall;
use renft_kit::abi::IAzrael;
use renft_kit::*;

use crate::common::recording_client;

const PUNKS: &str = "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb";
const LOOT: &str = "0xFF9C1B15B16263C61D017EE9F65C50E4AE0113D7";

// =============================================================================
// lend
// =============================================================================

#[tokio::test]
async fn test_lend_batch_is_sorted_and_packed() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    let azrael = renft.azrael().unwrap();

    let pending = azrael
        .lend(
            [PUNKS, LOOT, PUNKS],
            ["300", "12", "0x10"],
            [1u64, 1, 1],
            [7, 14, 30],
            [0.5, 1.0, 9999.9999],
            ["1", "2.25", "0.0001"],
            [PaymentToken::Weth, PaymentToken::Dai, PaymentToken::Usdc],
        )
        .await
        .unwrap();

    let sent = recorder.last();
    assert_eq!(sent.to, Some(AZRAEL_MAINNET_ADDRESS));
    assert_eq!(pending.tx_hash(), alloy_primitives::keccak256(&sent.input));

    let call = IAzrael::lendCall::abi_decode(&sent.input).unwrap();
    let punks: Address = PUNKS.parse().unwrap();
    let loot: Address = LOOT.to_lowercase().parse().unwrap();

    // 0xb4.. sorts before 0xff..; token 0x10 (16) before 300
    assert_eq!(call.nfts, vec![punks, punks, loot]);
    assert_eq!(
        call.tokenIds,
        vec![U256::from(16), U256::from(300), U256::from(12)]
    );
    assert_eq!(call.maxRentDurations, vec![30, 7, 14]);
    assert_eq!(
        call.dailyRentPrices,
        vec![
            FixedBytes([0x27, 0x0f, 0x27, 0x0f]),
            FixedBytes([0x00, 0x00, 0x13, 0x88]),
            FixedBytes([0x00, 0x01, 0x00, 0x00]),
        ]
    );
    assert_eq!(
        call.nftPrices,
        vec![
            FixedBytes([0x00, 0x00, 0x00, 0x01]),
            FixedBytes([0x00, 0x01, 0x00, 0x00]),
            FixedBytes([0x00, 0x02, 0x09, 0xc4]),
        ]
    );
    assert_eq!(call.paymentTokens, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_lend_prices_round_trip() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    renft
        .azrael()
        .unwrap()
        .lend(
            [PUNKS],
            [1u64],
            [1u64],
            [1],
            ["42.0420"],
            [Price::new(7, 5).unwrap()],
            [PaymentToken::Tusd],
        )
        .await
        .unwrap();

    let call = IAzrael::lendCall::abi_decode(&recorder.last().input).unwrap();
    let daily = Price::unpack(call.dailyRentPrices[0]).unwrap();
    assert_eq!(daily.to_string(), "42.042");
    assert_eq!(Price::unpack(call.nftPrices[0]).unwrap().to_string(), "7.0005");
}

#[tokio::test]
async fn test_lend_errors_submit_nothing() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    let azrael = renft.azrael().unwrap();

    let err = azrael
        .lend([PUNKS], [1u64], [1u64], [1], ["0"], ["1"], [PaymentToken::Weth])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ParsePrice(ParsePriceError::TooLow(_))));

    let err = azrael
        .lend([PUNKS], [1u64], [1u64], [1], ["1.00001"], ["1"], [PaymentToken::Weth])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ParsePrice(ParsePriceError::TooManyDecimals(_))
    ));

    let err = azrael
        .lend(["0xnot-an-address"], [1u64], [1u64], [1], ["1"], ["1"], [PaymentToken::Weth])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ParseAddress(_)));

    let err = azrael
        .lend([PUNKS], ["-1"], [1u64], [1], ["1"], ["1"], [PaymentToken::Weth])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ParseUint(_)));

    assert!(recorder.sent().is_empty());
}

// =============================================================================
// rent / returnIt / claimCollateral / stopLending
// =============================================================================

#[tokio::test]
async fn test_rent_with_options() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    renft
        .azrael()
        .unwrap()
        .rent([PUNKS], [5u64], [55u64], [3])
        .options(CallOptions {
            value: Some(U256::from(10u64)),
            gas: Some(300_000),
            ..Default::default()
        })
        .await
        .unwrap();

    let sent = recorder.last();
    assert_eq!(sent.value, Some(U256::from(10u64)));
    assert_eq!(sent.gas, Some(300_000));
    let call = IAzrael::rentCall::abi_decode(&sent.input).unwrap();
    assert_eq!(call.lendingIds, vec![U256::from(55)]);
    assert_eq!(call.rentDurations, vec![3]);
}

#[tokio::test]
async fn test_identifier_calls_are_batched() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    let azrael = renft.azrael().unwrap();

    azrael
        .claim_collateral([LOOT, PUNKS], [1u64, 2], [10u64, 20])
        .await
        .unwrap();
    let call = IAzrael::claimCollateralCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(call.lendingIds, vec![U256::from(20), U256::from(10)]);

    azrael
        .return_it([PUNKS, PUNKS], [9u64, 3], [90u64, 30])
        .await
        .unwrap();
    let call = IAzrael::returnItCall::abi_decode(&recorder.last().input).unwrap();
    assert_eq!(call.tokenIds, vec![U256::from(3), U256::from(9)]);
    assert_eq!(call.lendingIds, vec![U256::from(30), U256::from(90)]);

    assert_eq!(recorder.sent().len(), 2);
}

#[tokio::test]
async fn test_empty_batch_is_forwarded() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    renft
        .azrael()
        .unwrap()
        .stop_lending(Vec::<&str>::new(), Vec::<u64>::new(), Vec::<u64>::new())
        .await
        .unwrap();

    let call = IAzrael::stopLendingCall::abi_decode(&recorder.last().input).unwrap();
    assert!(call.nfts.is_empty());
}

#[test]
fn test_calldata_without_submitting() {
    let (renft, recorder) = recording_client(Network::Mainnet);
    let call = renft
        .azrael()
        .unwrap()
        .stop_lending([PUNKS], [1u64], [2u64]);

    assert_eq!(call.contract(), AZRAEL_MAINNET_ADDRESS);
    let data = call.calldata().unwrap();
    assert_eq!(&data[..4], IAzrael::stopLendingCall::SELECTOR.as_slice());

    let request = call.into_request().unwrap();
    assert_eq!(request.input.input(), Some(&data));
    assert!(recorder.sent().is_empty());
}
