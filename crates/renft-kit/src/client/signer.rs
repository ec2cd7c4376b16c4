//! Signer trait and implementations.
//!
//! A `Signer` knows which address it signs for and hands out an
//! [`EthereumWallet`] that the provider uses to sign transactions.
//!
//! # Implementations
//!
//! - [`InMemorySigner`] - Single key stored in memory
//! - [`EnvSigner`] - Key loaded from the `RENFT_PRIVATE_KEY` environment variable
//!
//! # Example
//!
//! ```rust,no_run
//! use renft_kit::{InMemorySigner, Renft};
//!
//! # fn example() -> Result<(), renft_kit::Error> {
//! let signer = InMemorySigner::new(
//!     "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
//! )?;
//!
//! let renft = Renft::mainnet().signer(signer).build()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;

use crate::error::{Error, SignerError};

/// Environment variable read by [`EnvSigner`].
pub const PRIVATE_KEY_ENV: &str = "RENFT_PRIVATE_KEY";

// ============================================================================
// Signer Trait
// ============================================================================

/// Trait for transaction signers.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use renft_kit::Signer;
///
/// struct KmsSigner { /* ... */ }
///
/// impl Signer for KmsSigner {
///     fn address(&self) -> Address {
///         self.address
///     }
///
///     fn wallet(&self) -> EthereumWallet {
///         EthereumWallet::from(self.aws_signer.clone())
///     }
/// }
/// ```
pub trait Signer: Send + Sync {
    /// The address this signer signs for.
    fn address(&self) -> Address;

    /// A wallet able to sign transactions for [`address`](Signer::address).
    fn wallet(&self) -> EthereumWallet;
}

/// Implement `Signer` for `Arc<dyn Signer>` for convenience.
impl Signer for Arc<dyn Signer> {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn wallet(&self) -> EthereumWallet {
        (**self).wallet()
    }
}

// ============================================================================
// InMemorySigner
// ============================================================================

/// A signer with a single secp256k1 key stored in memory.
///
/// Suitable for scripts, bots, and testing.
#[derive(Clone)]
pub struct InMemorySigner {
    key: PrivateKeySigner,
}

impl InMemorySigner {
    /// Create a signer from a hex-encoded private key, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not 32 bytes of hex or is not a valid
    /// secp256k1 scalar.
    pub fn new(private_key: impl AsRef<str>) -> Result<Self, Error> {
        let key = private_key
            .as_ref()
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { key })
    }

    /// Wrap an existing alloy key.
    pub fn from_private_key_signer(key: PrivateKeySigner) -> Self {
        Self { key }
    }

    /// Generate a fresh random key.
    pub fn random() -> Self {
        Self {
            key: PrivateKeySigner::random(),
        }
    }
}

impl Signer for InMemorySigner {
    fn address(&self) -> Address {
        self.key.address()
    }

    fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.key.clone())
    }
}

impl std::fmt::Debug for InMemorySigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySigner")
            .field("address", &self.key.address())
            .finish()
    }
}

// ============================================================================
// EnvSigner
// ============================================================================

/// A signer loaded from an environment variable.
///
/// Reads [`PRIVATE_KEY_ENV`] (`RENFT_PRIVATE_KEY`) by default.
///
/// # Example
///
/// ```bash
/// export RENFT_PRIVATE_KEY=0xac09...
/// ```
///
/// ```rust,no_run
/// use renft_kit::{EnvSigner, Signer};
///
/// let signer = EnvSigner::new().unwrap();
/// println!("Signing as {}", signer.address());
/// ```
#[derive(Clone, Debug)]
pub struct EnvSigner {
    inner: InMemorySigner,
}

impl EnvSigner {
    /// Load from `RENFT_PRIVATE_KEY`.
    pub fn new() -> Result<Self, Error> {
        Self::from_env_var(PRIVATE_KEY_ENV)
    }

    /// Load from a custom environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, Error> {
        let key = std::env::var(name).map_err(|_| SignerError::MissingEnv(name.to_string()))?;
        Ok(Self {
            inner: InMemorySigner::new(key)?,
        })
    }
}

impl Signer for EnvSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    fn wallet(&self) -> EthereumWallet {
        self.inner.wallet()
    }
}
