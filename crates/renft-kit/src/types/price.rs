//! Packed prices as stored by the Azrael contract.
//!
//! Azrael stores the daily rent price and the collateral (NFT) price of a
//! lending as a `bytes4`: the upper two bytes hold the whole part and the
//! lower two bytes hold four fractional digits. The contract scales the
//! value by the payment token's decimals when it unpacks it.
//!
//! ```
//! use renft_kit::Price;
//!
//! let price: Price = "1.5".parse().unwrap();
//! assert_eq!(price.pack().0, [0x00, 0x01, 0x13, 0x88]);
//! assert_eq!(price.to_string(), "1.5");
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParsePriceError;

/// Largest whole part the contract accepts.
const MAX_WHOLE: u16 = 9999;

/// Number of fractional digits in a packed price.
const DECIMAL_DIGITS: usize = 4;

/// Largest fractional part (`0.9999`).
const MAX_DECIMAL: u16 = 9999;

/// A price with up to four fractional digits, in `[0.0001, 9999.9999]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price {
    whole: u16,
    decimal: u16,
}

impl Price {
    /// Create a price from its whole part and its four fractional digits.
    ///
    /// `Price::new(1, 5000)` is `1.5`.
    pub fn new(whole: u16, decimal: u16) -> Result<Self, ParsePriceError> {
        let price = Self { whole, decimal };
        price.validate(|| price.to_string())?;
        Ok(price)
    }

    /// The whole part.
    pub const fn whole(&self) -> u16 {
        self.whole
    }

    /// The four fractional digits (`5000` for `.5`).
    pub const fn decimal(&self) -> u16 {
        self.decimal
    }

    /// Pack into the contract's `bytes4` representation.
    pub fn pack(&self) -> FixedBytes<4> {
        let mut bytes = [0u8; 4];
        bytes[..2].copy_from_slice(&self.whole.to_be_bytes());
        bytes[2..].copy_from_slice(&self.decimal.to_be_bytes());
        FixedBytes(bytes)
    }

    /// Unpack a `bytes4` price read back from the contract.
    pub fn unpack(packed: FixedBytes<4>) -> Result<Self, ParsePriceError> {
        let whole = u16::from_be_bytes([packed[0], packed[1]]);
        let decimal = u16::from_be_bytes([packed[2], packed[3]]);
        let price = Self { whole, decimal };
        price.validate(|| packed.to_string())?;
        Ok(price)
    }

    fn validate(&self, input: impl Fn() -> String) -> Result<(), ParsePriceError> {
        if self.whole > MAX_WHOLE || self.decimal > MAX_DECIMAL {
            return Err(ParsePriceError::TooHigh(input()));
        }
        if self.whole == 0 && self.decimal == 0 {
            return Err(ParsePriceError::TooLow(input()));
        }
        Ok(())
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePriceError::Empty);
        }
        if s.starts_with('-') {
            return Err(ParsePriceError::Negative(s.to_string()));
        }

        let (whole_part, decimal_part) = match s.split_once('.') {
            Some((whole, decimal)) => (whole, Some(decimal)),
            None => (s, None),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole_part) || (whole_part.is_empty() && decimal_part.is_none()) {
            return Err(ParsePriceError::InvalidNumber(s.to_string()));
        }

        let whole = if whole_part.is_empty() {
            0
        } else {
            // Anything that overflows u32 is certainly above the maximum.
            let whole: u32 = whole_part
                .parse()
                .map_err(|_| ParsePriceError::TooHigh(s.to_string()))?;
            if whole > u32::from(MAX_WHOLE) {
                return Err(ParsePriceError::TooHigh(s.to_string()));
            }
            whole as u16
        };

        let decimal = match decimal_part {
            None => 0,
            Some(digits) => {
                if digits.is_empty() || !all_digits(digits) {
                    return Err(ParsePriceError::InvalidNumber(s.to_string()));
                }
                if digits.len() > DECIMAL_DIGITS {
                    return Err(ParsePriceError::TooManyDecimals(s.to_string()));
                }
                let padded = format!("{digits:0<width$}", width = DECIMAL_DIGITS);
                padded
                    .parse()
                    .map_err(|_| ParsePriceError::InvalidNumber(s.to_string()))?
            }
        };

        if whole == 0 && decimal == 0 {
            return Err(ParsePriceError::TooLow(s.to_string()));
        }

        Ok(Self { whole, decimal })
    }
}

impl TryFrom<&str> for Price {
    type Error = ParsePriceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<f64> for Price {
    type Error = ParsePriceError;

    /// Converts through the shortest decimal rendering of the float, so
    /// `1.5_f64` packs exactly like `"1.5"`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParsePriceError::InvalidNumber(value.to_string()));
        }
        value.to_string().parse()
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimal == 0 {
            return write!(f, "{}", self.whole);
        }
        let digits = format!("{:04}", self.decimal);
        write!(f, "{}.{}", self.whole, digits.trim_end_matches('0'))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
