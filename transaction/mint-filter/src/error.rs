// Copyright (c) 2024 Botho Foundation

//! Registered error codes raised by the mint filter.

use crate::{classify::MsgCategory, state::StateError};
use core::fmt;
use displaydoc::Display;
use thiserror::Error;

/// Codespace all mint filter codes are registered under.
pub const CODESPACE: &str = "mintfilter";

/// A stable, registered error code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ErrorCode {
    pub codespace: &'static str,
    pub code: u32,
    pub description: &'static str,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.codespace, self.code)
    }
}

/// The minter record could not be read.
pub const ERR_GETTING_MINTER: ErrorCode = ErrorCode {
    codespace: CODESPACE,
    code: 1,
    description: "getting minter in ante handler",
};

/// An admin tried to mint or pay out while inflation is enabled.
pub const ERR_MANUAL_MINTING_DISABLED: ErrorCode = ErrorCode {
    codespace: CODESPACE,
    code: 2,
    description: "manual minting is disabled due to inflation being >0",
};

/// The admin set could not be read.
pub const ERR_GETTING_ADMINS: ErrorCode = ErrorCode {
    codespace: CODESPACE,
    code: 3,
    description: "getting admin set in ante handler",
};

/// Every code registered under [`CODESPACE`].
pub const REGISTERED_CODES: &[ErrorCode] =
    &[ERR_GETTING_MINTER, ERR_MANUAL_MINTING_DISABLED, ERR_GETTING_ADMINS];

/// Reasons the mint filter rejects a transaction.
///
/// All of them reject the transaction as submitted; resubmitting it
/// unchanged against the same state fails the same way.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum MintFilterError {
    /// getting minter in ante handler: {0}
    GettingMinter(#[source] StateError),

    /// manual minting is disabled due to inflation being >0: {category} in message {index}
    ManualMintingDisabled { category: MsgCategory, index: usize },

    /// getting admin set in ante handler: {0}
    GettingAdmins(#[source] StateError),
}

impl MintFilterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MintFilterError::GettingMinter(_) => ERR_GETTING_MINTER,
            MintFilterError::ManualMintingDisabled { .. } => ERR_MANUAL_MINTING_DISABLED,
            MintFilterError::GettingAdmins(_) => ERR_GETTING_ADMINS,
        }
    }

    /// Category of the offending message, for policy rejections.
    pub fn category(&self) -> Option<MsgCategory> {
        match self {
            MintFilterError::ManualMintingDisabled { category, .. } => Some(*category),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        false
    }
}
