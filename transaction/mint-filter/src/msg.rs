// Copyright (c) 2024 Botho Foundation

//! Decoded transaction messages and the transaction view the ante pipeline
//! operates on.

use crate::coin::{Address, Coin};
use serde::{Deserialize, Serialize};

/// Type URL of [`MsgMint`].
pub const MSG_MINT_TYPE_URL: &str = "/bth.tokenfactory.v1.MsgMint";

/// Type URL of [`MsgBurn`].
pub const MSG_BURN_TYPE_URL: &str = "/bth.tokenfactory.v1.MsgBurn";

/// Type URL of [`MsgPayoutStakeholders`].
pub const MSG_PAYOUT_STAKEHOLDERS_TYPE_URL: &str = "/bth.mint.v1.MsgPayoutStakeholders";

/// Type URL of [`MsgSend`].
pub const MSG_SEND_TYPE_URL: &str = "/bth.bank.v1.MsgSend";

/// Token-factory mint: creates `amount` and credits it to the sender, or to
/// `mint_to_address` when set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MsgMint {
    pub sender: Address,
    pub amount: Coin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_to_address: Option<Address>,
}

/// Token-factory burn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MsgBurn {
    pub sender: Address,
    pub amount: Coin,
}

/// Privileged payout of native tokens to the stakeholder set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MsgPayoutStakeholders {
    pub authority: Address,
    pub payout: Coin,
}

/// Plain transfer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Vec<Coin>,
}

/// A decoded transaction message.
///
/// Message kinds this node does not model are carried as [`Msg::Other`] with
/// their type URL.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "snake_case")]
pub enum Msg {
    TokenFactoryMint(MsgMint),
    TokenFactoryBurn(MsgBurn),
    PayoutStakeholders(MsgPayoutStakeholders),
    BankSend(MsgSend),
    Other { type_url: String },
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::TokenFactoryMint(_) => MSG_MINT_TYPE_URL,
            Msg::TokenFactoryBurn(_) => MSG_BURN_TYPE_URL,
            Msg::PayoutStakeholders(_) => MSG_PAYOUT_STAKEHOLDERS_TYPE_URL,
            Msg::BankSend(_) => MSG_SEND_TYPE_URL,
            Msg::Other { type_url } => type_url,
        }
    }
}

impl From<MsgMint> for Msg {
    fn from(msg: MsgMint) -> Self {
        Msg::TokenFactoryMint(msg)
    }
}

impl From<MsgBurn> for Msg {
    fn from(msg: MsgBurn) -> Self {
        Msg::TokenFactoryBurn(msg)
    }
}

impl From<MsgPayoutStakeholders> for Msg {
    fn from(msg: MsgPayoutStakeholders) -> Self {
        Msg::PayoutStakeholders(msg)
    }
}

impl From<MsgSend> for Msg {
    fn from(msg: MsgSend) -> Self {
        Msg::BankSend(msg)
    }
}

/// A transaction as seen by ante decorators.
pub trait Tx {
    /// Messages in execution order.
    fn msgs(&self) -> &[Msg];

    fn memo(&self) -> &str {
        ""
    }
}

/// A decoded transaction body.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub msgs: Vec<Msg>,
    #[serde(default)]
    pub memo: String,
}

impl Transaction {
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self {
            msgs,
            memo: String::new(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}

impl Tx for Transaction {
    fn msgs(&self) -> &[Msg] {
        &self.msgs
    }

    fn memo(&self) -> &str {
        &self.memo
    }
}
