// Copyright (c) 2024 Botho Foundation

//! Fixed-point inflation rate read from the minting module's state.
//!
//! Chain-state decimals carry 18 fractional digits. The rate is stored as an
//! unsigned count of 10^-18 atoms, so a negative rate cannot be represented.

use core::{fmt, str::FromStr};
use displaydoc::Display;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of fractional digits carried by an [`InflationRate`].
pub const PRECISION: u32 = 18;

/// Atoms in one whole unit (1.0).
const ONE: u128 = 10u128.pow(PRECISION);

/// Errors produced when building or parsing an [`InflationRate`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum RateError {
    /// Empty inflation rate
    Empty,

    /// Inflation rate must not be negative: {0}
    Negative(String),

    /// Malformed inflation rate: {0}
    Malformed(String),

    /// Inflation rate has {0} fractional digits, at most 18 are allowed
    TooPrecise(usize),

    /// Inflation rate overflows the fixed-point range
    Overflow,
}

/// The per-period supply growth fraction.
///
/// `0` is the distinguished "no protocol-driven supply growth" state.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InflationRate(u128);

impl InflationRate {
    /// No inflation.
    pub const ZERO: Self = Self(0);

    /// Build a rate from raw 10^-18 atoms.
    pub const fn from_atoms(atoms: u128) -> Self {
        Self(atoms)
    }

    /// Build `value * 10^-prec`, e.g. `with_prec(1, 2)` is 0.01.
    pub fn with_prec(value: u64, prec: u32) -> Result<Self, RateError> {
        if prec > PRECISION {
            return Err(RateError::TooPrecise(prec as usize));
        }
        (value as u128)
            .checked_mul(10u128.pow(PRECISION - prec))
            .map(Self)
            .ok_or(RateError::Overflow)
    }

    /// Raw 10^-18 atoms.
    pub const fn atoms(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for InflationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / ONE, self.0 % ONE)
    }
}

impl FromStr for InflationRate {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RateError::Empty);
        }
        if s.starts_with('-') {
            return Err(RateError::Negative(s.to_string()));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        let dangling_point = s.contains('.') && frac.is_empty();
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) || dangling_point {
            return Err(RateError::Malformed(s.to_string()));
        }
        if frac.len() > PRECISION as usize {
            return Err(RateError::TooPrecise(frac.len()));
        }

        let whole: u128 = whole.parse().map_err(|_| RateError::Overflow)?;
        let frac_atoms: u128 = if frac.is_empty() {
            0
        } else {
            let digits: u128 = frac
                .parse()
                .map_err(|_| RateError::Malformed(s.to_string()))?;
            digits * 10u128.pow(PRECISION - frac.len() as u32)
        };

        whole
            .checked_mul(ONE)
            .and_then(|atoms| atoms.checked_add(frac_atoms))
            .map(Self)
            .ok_or(RateError::Overflow)
    }
}

impl Serialize for InflationRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InflationRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
