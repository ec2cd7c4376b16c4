//! Client configuration tests.

use alloy_primitives::Address;
use renft_kit::*;

use crate::common::{SENDER, recording_client};

#[test]
fn test_with_submitter_exposes_sender() {
    let (renft, _) = recording_client(Network::Mainnet);
    assert_eq!(renft.sender(), Some(SENDER));
    assert_eq!(renft.network(), Network::Mainnet);
}

#[test]
fn test_deployment_resolution() {
    let (mainnet, _) = recording_client(Network::Mainnet);
    assert_eq!(mainnet.azrael().unwrap().address(), AZRAEL_MAINNET_ADDRESS);
    assert!(matches!(
        mainnet.whoopi(),
        Err(Error::NoDeployment {
            contract: "Whoopi",
            network: Network::Mainnet
        })
    ));

    let (custom, _) = recording_client(Network::Custom);
    let err = custom.azrael().unwrap_err();
    assert!(err.to_string().contains("custom"), "{err}");
    assert_eq!(
        custom.azrael_at(Address::repeat_byte(1)).unwrap().address(),
        Address::repeat_byte(1)
    );
}

#[test]
fn test_builder_without_signer_cannot_submit_offline() {
    let renft = Renft::custom("http://127.0.0.1:8545").build().unwrap();
    assert!(renft.sender().is_none());
    assert_eq!(renft.rpc_url(), Some("http://127.0.0.1:8545"));
}

#[tokio::test]
async fn test_provider_submitter_without_signer() {
    let renft = Renft::custom("http://127.0.0.1:1")
        .azrael_address("0x1111111111111111111111111111111111111111")
        .unwrap()
        .build()
        .unwrap();

    let err = renft
        .azrael()
        .unwrap()
        .stop_lending(["0x2222222222222222222222222222222222222222"], [1u64], [1u64])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoSigner));
}

#[test]
fn test_signer_sources_agree() {
    let key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
    let signer = InMemorySigner::new(key).unwrap();
    let renft = Renft::mainnet().private_key(key).unwrap().build().unwrap();
    assert_eq!(renft.sender(), Some(signer.address()));
}

#[test]
fn test_payment_token_and_network_parsing() {
    assert_eq!("WETH".parse::<PaymentToken>().unwrap(), PaymentToken::Weth);
    assert_eq!(PaymentToken::try_from(6u8).unwrap(), PaymentToken::Rent);
    assert!(PaymentToken::try_from(7u8).is_err());
    assert_eq!("avax".parse::<Network>().unwrap(), Network::Avalanche);
    assert_eq!(Network::Avalanche.chain_id(), Some(43114));
}
