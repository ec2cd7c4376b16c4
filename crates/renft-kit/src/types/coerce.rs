//! Conversion traits for contract call arguments.
//!
//! Contract methods accept both typed values (preferred) and string
//! representations for runtime input, in the same way for every column of a
//! batch.
//!
//! ```
//! use renft_kit::{IntoAddress, IntoUint256};
//! use alloy_primitives::U256;
//!
//! let a = "0xABCDEF0000000000000000000000000000000001".into_address().unwrap();
//! let b = "0xabcdef0000000000000000000000000000000001".into_address().unwrap();
//! assert_eq!(a, b);
//!
//! assert_eq!("0x10".into_uint256().unwrap(), U256::from(16));
//! ```

use alloy_primitives::{Address, U256};

use crate::error::{Error, ParseAddressError, ParsePriceError, ParseUintError};

use super::price::Price;

// ============================================================================
// IntoAddress
// ============================================================================

/// Trait for types that can be converted into an [`Address`].
///
/// String input is lower-cased before parsing, so mixed-case (checksummed or
/// not) and lower-case spellings of an address are the same address.
pub trait IntoAddress {
    /// Convert into an Address.
    fn into_address(self) -> Result<Address, ParseAddressError>;
}

impl IntoAddress for Address {
    fn into_address(self) -> Result<Address, ParseAddressError> {
        Ok(self)
    }
}

impl IntoAddress for &Address {
    fn into_address(self) -> Result<Address, ParseAddressError> {
        Ok(*self)
    }
}

impl IntoAddress for &str {
    fn into_address(self) -> Result<Address, ParseAddressError> {
        parse_address(self)
    }
}

impl IntoAddress for String {
    fn into_address(self) -> Result<Address, ParseAddressError> {
        parse_address(&self)
    }
}

impl IntoAddress for &String {
    fn into_address(self) -> Result<Address, ParseAddressError> {
        parse_address(self)
    }
}

fn parse_address(input: &str) -> Result<Address, ParseAddressError> {
    input
        .trim()
        .to_ascii_lowercase()
        .parse::<Address>()
        .map_err(|e| ParseAddressError {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

// ============================================================================
// IntoUint256
// ============================================================================

/// Trait for types that can be converted into a `uint256` argument.
///
/// Used for token IDs, lending IDs, lend amounts and fees. Strings may be
/// decimal or `0x`-prefixed hex.
pub trait IntoUint256 {
    /// Convert into a U256.
    fn into_uint256(self) -> Result<U256, ParseUintError>;
}

impl IntoUint256 for U256 {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        Ok(self)
    }
}

impl IntoUint256 for u64 {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        Ok(U256::from(self))
    }
}

impl IntoUint256 for u128 {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        Ok(U256::from(self))
    }
}

impl IntoUint256 for u32 {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        Ok(U256::from(self))
    }
}

impl IntoUint256 for &str {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        parse_uint256(self)
    }
}

impl IntoUint256 for String {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        parse_uint256(&self)
    }
}

impl IntoUint256 for &String {
    fn into_uint256(self) -> Result<U256, ParseUintError> {
        parse_uint256(self)
    }
}

fn parse_uint256(input: &str) -> Result<U256, ParseUintError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseUintError {
            input: input.to_string(),
            reason: "empty".to_string(),
        });
    }
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(trimmed, 10),
    };
    parsed.map_err(|e| ParseUintError {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

// ============================================================================
// IntoPrice
// ============================================================================

/// Trait for types that can be converted into a [`Price`].
pub trait IntoPrice {
    /// Convert into a Price.
    fn into_price(self) -> Result<Price, ParsePriceError>;
}

impl IntoPrice for Price {
    fn into_price(self) -> Result<Price, ParsePriceError> {
        Ok(self)
    }
}

impl IntoPrice for f64 {
    fn into_price(self) -> Result<Price, ParsePriceError> {
        Price::try_from(self)
    }
}

impl IntoPrice for &str {
    fn into_price(self) -> Result<Price, ParsePriceError> {
        self.parse()
    }
}

impl IntoPrice for String {
    fn into_price(self) -> Result<Price, ParsePriceError> {
        self.parse()
    }
}

// ============================================================================
// Column helpers
// ============================================================================

pub(crate) fn addresses(
    column: impl IntoIterator<Item = impl IntoAddress>,
) -> Result<Vec<Address>, Error> {
    column
        .into_iter()
        .map(|a| a.into_address().map_err(Error::from))
        .collect()
}

pub(crate) fn uint256s(
    column: impl IntoIterator<Item = impl IntoUint256>,
) -> Result<Vec<U256>, Error> {
    column
        .into_iter()
        .map(|id| id.into_uint256().map_err(Error::from))
        .collect()
}

pub(crate) fn packed_prices(
    column: impl IntoIterator<Item = impl IntoPrice>,
) -> Result<Vec<alloy_primitives::FixedBytes<4>>, Error> {
    column
        .into_iter()
        .map(|p| p.into_price().map(|p| p.pack()).map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOWER: &str = "0x94d8f036a0fbc216bb532d33bdf6564157af0cd7";
    const MIXED: &str = "0x94D8f036a0fbC216Bb532D33bDF6564157Af0cD7";

    #[test]
    fn test_address_case_insensitive() {
        let lower = LOWER.into_address().unwrap();
        let mixed = MIXED.into_address().unwrap();
        let upper = LOWER.to_ascii_uppercase().into_address().unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_address_rejects_bad_input() {
        let err = "0x1234".into_address().unwrap_err();
        assert_eq!(err.input, "0x1234");
        assert!("not-an-address".into_address().is_err());
    }

    #[test]
    fn test_token_id_decimal_and_hex() {
        assert_eq!("42".into_uint256().unwrap(), U256::from(42));
        assert_eq!("0x2a".into_uint256().unwrap(), U256::from(42));
        assert_eq!("0X2A".into_uint256().unwrap(), U256::from(42));
        assert_eq!(7u64.into_uint256().unwrap(), U256::from(7));
        assert_eq!(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
                .into_uint256()
                .unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_token_id_rejects_bad_input() {
        assert!("".into_uint256().is_err());
        assert!("12abc".into_uint256().is_err());
        assert!("-1".into_uint256().is_err());
    }

    #[test]
    fn test_price_conversions_agree() {
        let from_str = "2.5".into_price().unwrap();
        let from_f64 = 2.5_f64.into_price().unwrap();
        let from_string = String::from("2.5000").into_price().unwrap();
        assert_eq!(from_str, from_f64);
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_column_helpers_stop_at_first_error() {
        let result = addresses([LOWER, "bogus"]);
        assert!(matches!(result, Err(Error::ParseAddress(_))));

        let prices = packed_prices(["1", "0.5"]).unwrap();
        assert_eq!(prices[1].0, [0x00, 0x00, 0x13, 0x88]);

        assert_eq!(
            uint256s([1u64, 2u64]).unwrap(),
            vec![U256::from(1), U256::from(2)]
        );
    }
}
