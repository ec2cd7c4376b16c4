//! Payment tokens accepted by the rental contracts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePaymentTokenError;

/// Currency in which rent and collateral are paid.
///
/// Encoded on-chain as the `uint8` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum PaymentToken {
    /// Placeholder the contracts reject; never a valid choice for a lending.
    Sentinel = 0,
    Weth = 1,
    Dai = 2,
    Usdc = 3,
    Usdt = 4,
    Tusd = 5,
    Rent = 6,
}

impl PaymentToken {
    /// All payment tokens in discriminant order.
    pub const ALL: [PaymentToken; 7] = [
        PaymentToken::Sentinel,
        PaymentToken::Weth,
        PaymentToken::Dai,
        PaymentToken::Usdc,
        PaymentToken::Usdt,
        PaymentToken::Tusd,
        PaymentToken::Rent,
    ];

    /// The on-chain `uint8` value.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The token symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            PaymentToken::Sentinel => "SENTINEL",
            PaymentToken::Weth => "WETH",
            PaymentToken::Dai => "DAI",
            PaymentToken::Usdc => "USDC",
            PaymentToken::Usdt => "USDT",
            PaymentToken::Tusd => "TUSD",
            PaymentToken::Rent => "RENT",
        }
    }
}

impl From<PaymentToken> for u8 {
    fn from(token: PaymentToken) -> Self {
        token.as_u8()
    }
}

impl TryFrom<u8> for PaymentToken {
    type Error = ParsePaymentTokenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ParsePaymentTokenError::UnknownDiscriminant(value))
    }
}

impl FromStr for PaymentToken {
    type Err = ParsePaymentTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|token| token.symbol().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ParsePaymentTokenError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for PaymentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
