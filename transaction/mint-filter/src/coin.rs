// Copyright (c) 2024 Botho Foundation

//! Addresses, denominations and coins carried by gated messages.

use core::fmt;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum denomination length.
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum denomination length.
pub const MAX_DENOM_LEN: usize = 128;

/// Errors for malformed addresses and denominations.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum CoinError {
    /// Address is empty
    EmptyAddress,

    /// Address contains whitespace: {0:?}
    AddressWhitespace(String),

    /// Invalid denomination: {0:?}
    InvalidDenom(String),
}

/// An account address, in its canonical string encoding.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Result<Self, CoinError> {
        let address = address.into();
        if address.is_empty() {
            return Err(CoinError::EmptyAddress);
        }
        if address.chars().any(char::is_whitespace) {
            return Err(CoinError::AddressWhitespace(address));
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = CoinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that `denom` is a well-formed denomination.
///
/// A denomination is 3 to 128 characters, starts with an ASCII letter, and
/// otherwise uses ASCII alphanumerics or `/ : . _ -`. Token-factory denoms
/// (`factory/<creator>/<subdenom>`) satisfy this.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let well_formed = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&denom.len())
        && denom.starts_with(|c: char| c.is_ascii_alphabetic())
        && denom
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));
    if well_formed {
        Ok(())
    } else {
        Err(CoinError::InvalidDenom(denom.to_string()))
    }
}

/// Which supply a denomination belongs to.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum DenomClass {
    /// native
    Native,
    /// independent
    Independent,
}

impl DenomClass {
    /// Classify `denom` against the protocol's native denomination.
    pub fn of(denom: &str, native_denom: &str) -> Self {
        if denom == native_denom {
            Self::Native
        } else {
            Self::Independent
        }
    }
}

/// An amount of a single, well-formed denomination.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoin")]
pub struct Coin {
    denom: String,
    amount: u64,
}

/// Wire form of a [`Coin`], before its denomination is checked.
#[derive(Deserialize)]
struct RawCoin {
    denom: String,
    amount: u64,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u64) -> Result<Self, CoinError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self { denom, amount })
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl TryFrom<RawCoin> for Coin {
    type Error = CoinError;

    fn try_from(raw: RawCoin) -> Result<Self, Self::Error> {
        Self::new(raw.denom, raw.amount)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert_eq!(Address::new(""), Err(CoinError::EmptyAddress));
        assert!(matches!(
            Address::new("bth1 admin"),
            Err(CoinError::AddressWhitespace(_))
        ));
        let address = Address::new("bth1admin").unwrap();
        assert_eq!(address.as_str(), "bth1admin");
        assert_eq!(address.to_string(), "bth1admin");
    }

    #[test]
    fn test_address_serde_validates() {
        let address: Address = serde_json::from_str("\"bth1user\"").unwrap();
        assert_eq!(address.as_str(), "bth1user");
        assert!(serde_json::from_str::<Address>("\"\"").is_err());
    }

    #[test]
    fn test_validate_denom() {
        assert!(validate_denom("ubth").is_ok());
        assert!(validate_denom("factory/bth1user/ufoo").is_ok());
        assert!(validate_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").is_ok());
        assert!(validate_denom("ab").is_err());
        assert!(validate_denom("1bth").is_err());
        assert!(validate_denom("u bth").is_err());
        assert!(validate_denom(&"u".repeat(MAX_DENOM_LEN + 1)).is_err());
    }

    #[test]
    fn test_denom_class() {
        assert_eq!(DenomClass::of("ubth", "ubth"), DenomClass::Native);
        assert_eq!(DenomClass::of("factory", "ubth"), DenomClass::Independent);
    }

    #[test]
    fn test_coin_display() {
        assert_eq!(Coin::new("ubth", 1).unwrap().to_string(), "1ubth");
    }

    #[test]
    fn test_coin_rejects_malformed_denom() {
        assert_eq!(
            Coin::new("UBTH ", 1),
            Err(CoinError::InvalidDenom("UBTH ".to_string()))
        );
        assert!(Coin::new("", 1).is_err());
        let coin = Coin::new("factory/bth1user/ufoo", 7).unwrap();
        assert_eq!(coin.denom(), "factory/bth1user/ufoo");
        assert_eq!(coin.amount(), 7);
    }

    #[test]
    fn test_coin_serde_validates_denom() {
        let coin: Coin = serde_json::from_str(r#"{"denom":"ubth","amount":3}"#).unwrap();
        assert_eq!(coin, Coin::new("ubth", 3).unwrap());
        assert!(serde_json::from_str::<Coin>(r#"{"denom":"1bth","amount":3}"#).is_err());
        assert_eq!(
            serde_json::to_string(&coin).unwrap(),
            r#"{"denom":"ubth","amount":3}"#
        );
    }
}
