//! The main Renft client.

use std::sync::Arc;

use alloy::providers::fillers::{ChainIdFiller, GasFiller};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use alloy_primitives::Address;
use tracing::debug;

use crate::contracts::{Azrael, Whoopi};
use crate::error::Error;
use crate::types::{IntoAddress, Network};

use super::signer::{InMemorySigner, PRIVATE_KEY_ENV, Signer};
use super::submit::{ProviderSubmitter, Submitter};

/// Environment variable selecting the network (`mainnet`, `avalanche`, or a
/// custom RPC URL).
pub const NETWORK_ENV: &str = "RENFT_NETWORK";
/// Environment variable overriding the RPC URL.
pub const RPC_URL_ENV: &str = "RENFT_RPC_URL";
/// Environment variable overriding the Azrael address.
pub const AZRAEL_ADDRESS_ENV: &str = "RENFT_AZRAEL_ADDRESS";
/// Environment variable setting the Whoopi address.
pub const WHOOPI_ADDRESS_ENV: &str = "RENFT_WHOOPI_ADDRESS";

/// The main client for the reNFT rental contracts.
///
/// Holds the submitter (provider plus signer) and the contract addresses
/// for one network. Contract wrappers are cheap handles created on demand.
///
/// # Example
///
/// ```rust,no_run
/// use renft_kit::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), renft_kit::Error> {
///     let renft = Renft::mainnet()
///         .private_key("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")?
///         .build()?;
///
///     let pending = renft
///         .azrael()?
///         .stop_lending(["0x9d0b3a9e6d66e0d7d3e2bc2e8f8f0b5b8b8e8f8f"], [1u64], [7u64])
///         .await?;
///     println!("tx: {}", pending.tx_hash());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Renft {
    submitter: Arc<dyn Submitter>,
    network: Network,
    rpc_url: Option<String>,
    azrael_address: Option<Address>,
    whoopi_address: Option<Address>,
}

impl Renft {
    /// Create a builder for Ethereum mainnet.
    pub fn mainnet() -> RenftBuilder {
        RenftBuilder::new(Network::Mainnet, None)
    }

    /// Create a builder for Avalanche C-Chain.
    pub fn avalanche() -> RenftBuilder {
        RenftBuilder::new(Network::Avalanche, None)
    }

    /// Create a builder with a custom RPC URL.
    pub fn custom(rpc_url: impl Into<String>) -> RenftBuilder {
        RenftBuilder::new(Network::Custom, Some(rpc_url.into()))
    }

    /// Create a client around an existing submitter.
    ///
    /// Use this to route transactions through something other than a plain
    /// RPC provider. Contract addresses fall back to the network's known
    /// deployments; use [`azrael_at`](Self::azrael_at) and
    /// [`whoopi_at`](Self::whoopi_at) for anything else.
    pub fn with_submitter(network: Network, submitter: impl Submitter + 'static) -> Renft {
        Renft {
            submitter: Arc::new(submitter),
            network,
            rpc_url: None,
            azrael_address: None,
            whoopi_address: None,
        }
    }

    /// Create a configured client from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `RENFT_NETWORK` (optional): `"mainnet"`, `"avalanche"`, or a custom
    ///   RPC URL. Defaults to `"mainnet"` if not set.
    /// - `RENFT_RPC_URL` (optional): overrides the network's default RPC URL.
    /// - `RENFT_PRIVATE_KEY` (optional): hex private key for signing.
    /// - `RENFT_AZRAEL_ADDRESS` (optional): Azrael deployment override.
    /// - `RENFT_WHOOPI_ADDRESS` (optional): Whoopi deployment.
    ///
    /// Without `RENFT_PRIVATE_KEY` the client is built, but every submission
    /// fails with [`Error::NoSigner`].
    ///
    /// ```bash
    /// export RENFT_NETWORK=avalanche
    /// export RENFT_PRIVATE_KEY=0xac09...
    /// export RENFT_WHOOPI_ADDRESS=0x...
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any variable that is set holds an invalid value.
    pub fn from_env() -> Result<Renft, Error> {
        let network = env_var(NETWORK_ENV);
        let rpc_url = env_var(RPC_URL_ENV);
        let private_key = env_var(PRIVATE_KEY_ENV);
        let azrael = env_var(AZRAEL_ADDRESS_ENV);
        let whoopi = env_var(WHOOPI_ADDRESS_ENV);

        let mut builder = match network.as_deref() {
            None => Renft::mainnet(),
            Some(value) if value.contains("://") => Renft::custom(value),
            Some(value) => match value.parse::<Network>()? {
                Network::Mainnet => Renft::mainnet(),
                Network::Avalanche => Renft::avalanche(),
                Network::Custom => {
                    let url = rpc_url.clone().ok_or_else(|| {
                        Error::Config(format!(
                            "{NETWORK_ENV}=custom requires {RPC_URL_ENV} to be set"
                        ))
                    })?;
                    Renft::custom(url)
                }
            },
        };

        if let Some(url) = rpc_url {
            builder = builder.rpc_url(url);
        }
        if let Some(key) = private_key {
            builder = builder.private_key(&key)?;
        }
        if let Some(address) = azrael {
            builder = builder.azrael_address(address.as_str())?;
        }
        if let Some(address) = whoopi {
            builder = builder.whoopi_address(address.as_str())?;
        }

        builder.build()
    }

    /// Get the network this client targets.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Get the chain id transactions are signed for, when the network fixes
    /// one. Custom networks take it from the RPC at submission time.
    pub fn chain_id(&self) -> Option<u64> {
        self.network.chain_id()
    }

    /// Get the RPC URL, if the client was built from one.
    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    /// Get the address transactions are sent from, if a signer is configured.
    pub fn sender(&self) -> Option<Address> {
        self.submitter.sender()
    }

    /// Get the submitter shared by every contract handle.
    pub fn submitter(&self) -> Arc<dyn Submitter> {
        self.submitter.clone()
    }

    // ========================================================================
    // Contracts
    // ========================================================================

    /// The Azrael contract at the configured address, or the network's known
    /// deployment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDeployment`] if neither is available.
    pub fn azrael(&self) -> Result<Azrael, Error> {
        let address = self
            .azrael_address
            .or_else(|| self.network.azrael_address())
            .ok_or(Error::NoDeployment {
                contract: "Azrael",
                network: self.network,
            })?;
        Ok(Azrael::new(self.submitter.clone(), Some(address)))
    }

    /// The Azrael contract at an explicit address.
    pub fn azrael_at(&self, address: impl IntoAddress) -> Result<Azrael, Error> {
        Ok(Azrael::new(
            self.submitter.clone(),
            Some(address.into_address()?),
        ))
    }

    /// The Whoopi contract at the configured address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDeployment`] if no Whoopi address was configured.
    pub fn whoopi(&self) -> Result<Whoopi, Error> {
        let address = self.whoopi_address.ok_or(Error::NoDeployment {
            contract: "Whoopi",
            network: self.network,
        })?;
        Ok(Whoopi::new(self.submitter.clone(), address))
    }

    /// The Whoopi contract at an explicit address.
    pub fn whoopi_at(&self, address: impl IntoAddress) -> Result<Whoopi, Error> {
        Ok(Whoopi::new(self.submitter.clone(), address.into_address()?))
    }
}

impl std::fmt::Debug for Renft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renft")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("sender", &self.sender())
            .finish()
    }
}

/// Builder for creating a [`Renft`] client.
///
/// # Example
///
/// ```rust,ignore
/// use renft_kit::*;
///
/// // Read-only configuration, submissions fail with NoSigner
/// let renft = Renft::mainnet().build()?;
///
/// // Avalanche with a Whoopi deployment
/// let renft = Renft::avalanche()
///     .private_key("0xac09...")?
///     .whoopi_address("0x...")?
///     .build()?;
/// ```
pub struct RenftBuilder {
    network: Network,
    rpc_url: Option<String>,
    signer: Option<Arc<dyn Signer>>,
    azrael_address: Option<Address>,
    whoopi_address: Option<Address>,
}

impl RenftBuilder {
    fn new(network: Network, rpc_url: Option<String>) -> Self {
        Self {
            network,
            rpc_url,
            signer: None,
            azrael_address: None,
            whoopi_address: None,
        }
    }

    /// Override the RPC URL.
    pub fn rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Set the signer for transactions.
    pub fn signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Set up signing with a hex private key.
    ///
    /// This is a convenience method that creates an [`InMemorySigner`].
    pub fn private_key(mut self, private_key: impl AsRef<str>) -> Result<Self, Error> {
        self.signer = Some(Arc::new(InMemorySigner::new(private_key)?));
        Ok(self)
    }

    /// Use an Azrael deployment other than the network default.
    pub fn azrael_address(mut self, address: impl IntoAddress) -> Result<Self, Error> {
        self.azrael_address = Some(address.into_address()?);
        Ok(self)
    }

    /// Set the Whoopi deployment.
    pub fn whoopi_address(mut self, address: impl IntoAddress) -> Result<Self, Error> {
        self.whoopi_address = Some(address.into_address()?);
        Ok(self)
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRpcUrl`] if the RPC URL does not parse, or
    /// [`Error::Config`] if the network has no default RPC URL and none was
    /// given.
    pub fn build(self) -> Result<Renft, Error> {
        let rpc_url = self
            .rpc_url
            .or_else(|| self.network.default_rpc_url().map(str::to_string))
            .ok_or_else(|| Error::Config(format!("No RPC URL for network {}", self.network)))?;
        let url = Url::parse(&rpc_url).map_err(|e| Error::InvalidRpcUrl {
            url: rpc_url.clone(),
            reason: e.to_string(),
        })?;

        // Known networks sign for their own chain id, so an RPC on another
        // chain rejects the transaction. Custom networks ask the RPC.
        let fillers = ProviderBuilder::new()
            .disable_recommended_fillers()
            .with_simple_nonce_management()
            .filler(ChainIdFiller::new(self.network.chain_id()))
            .filler(GasFiller);

        let submitter = match &self.signer {
            Some(signer) => {
                let provider = fillers
                    .wallet(signer.wallet())
                    .connect_http(url)
                    .erased();
                ProviderSubmitter::new(provider, Some(signer.address()))
            }
            None => ProviderSubmitter::new(fillers.connect_http(url).erased(), None),
        };

        debug!(
            network = %self.network,
            chain_id = ?self.network.chain_id(),
            rpc_url = %rpc_url,
            sender = ?submitter.sender(),
            "renft client configured"
        );

        Ok(Renft {
            submitter: Arc::new(submitter),
            network: self.network,
            rpc_url: Some(rpc_url),
            azrael_address: self.azrael_address,
            whoopi_address: self.whoopi_address,
        })
    }
}

impl std::fmt::Debug for RenftBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenftBuilder")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("signer", &self.signer.as_ref().map(|s| s.address()))
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
