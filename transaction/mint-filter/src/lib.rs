// Copyright (c) 2024 Botho Foundation

//! Ante-pipeline gate for supply-affecting admin messages.
//!
//! While the protocol inflation rate is above zero, token-factory mints and
//! stakeholder payouts signed by a proof-of-authority administrator are
//! rejected before execution. The decision depends only on the transaction
//! and two read-only pieces of state (the minter's inflation rate and the
//! admin set), so every validator reaches the same verdict.
//!
//! # Usage
//!
//! ```
//! use bth_transaction_mint_filter::{
//!     Address, AnteChain, AnteHandler, Coin, Context, InflationRate, Minter,
//!     MinterStore, MintFilterDecorator, MsgMint, PoaAdminSet, Transaction,
//! };
//!
//! let admin = Address::new("bth1admin").unwrap();
//! let minter = MinterStore::with_minter(Minter::initial(InflationRate::with_prec(1, 2).unwrap()));
//! let chain = AnteChain::new().with(MintFilterDecorator::new(minter, PoaAdminSet::new([admin.clone()])));
//!
//! let tx = Transaction::new(vec![MsgMint {
//!     sender: admin,
//!     amount: Coin::new("ubth", 1).unwrap(),
//!     mint_to_address: None,
//! }
//! .into()]);
//! assert!(chain.handle(Context::default(), &tx, false).is_err());
//! ```

#![deny(clippy::print_stdout)]

pub mod ante;
pub mod classify;
pub mod coin;
pub mod config;
pub mod error;
pub mod gate;
pub mod inflation;
pub mod msg;
pub mod state;

pub use crate::{
    ante::{AnteChain, AnteDecorator, AnteError, AnteHandler, AnteResult, Context, Terminator},
    classify::{classify, ClassifiedMsg, MsgCategory},
    coin::{validate_denom, Address, Coin, CoinError, DenomClass},
    config::{DenomPolicy, MintFilterConfig, DEFAULT_NATIVE_DENOM},
    error::{
        ErrorCode, MintFilterError, CODESPACE, ERR_GETTING_ADMINS, ERR_GETTING_MINTER,
        ERR_MANUAL_MINTING_DISABLED, REGISTERED_CODES,
    },
    gate::{MintFilterDecorator, PolicyDecision},
    inflation::{InflationRate, RateError},
    msg::{Msg, MsgBurn, MsgMint, MsgPayoutStakeholders, MsgSend, Transaction, Tx},
    state::{AdminDirectory, InflationOracle, Minter, MinterStore, PoaAdminSet, StateError},
};
