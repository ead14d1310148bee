// Copyright (c) 2024 Botho Foundation

//! Fixtures for exercising the mint filter inside an ante chain.

use bth_transaction_mint_filter::{
    Address, AnteHandler, AnteResult, Coin, Context, InflationOracle, InflationRate, Msg, MsgMint,
    MsgPayoutStakeholders, MsgSend, StateError, Tx, DEFAULT_NATIVE_DENOM,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Independently issued token-factory denomination.
pub const FACTORY_DENOM: &str = "factory";

/// The proof-of-authority admin used throughout the tests.
pub fn poa_admin() -> Address {
    Address::new("bth1qpoaadmin0000000000000000000000000000").expect("valid address")
}

/// A regular account.
pub fn std_user() -> Address {
    Address::new("bth1qstduser00000000000000000000000000000").expect("valid address")
}

pub fn native_coin(amount: u64) -> Coin {
    Coin::new(DEFAULT_NATIVE_DENOM, amount).expect("valid denom")
}

pub fn factory_coin(amount: u64) -> Coin {
    Coin::new(FACTORY_DENOM, amount).expect("valid denom")
}

/// 1%.
pub fn one_percent() -> InflationRate {
    InflationRate::with_prec(1, 2).expect("in range")
}

pub fn mint_msg(sender: Address, amount: Coin) -> Msg {
    MsgMint {
        sender,
        amount,
        mint_to_address: None,
    }
    .into()
}

pub fn payout_msg(authority: Address, payout: Coin) -> Msg {
    MsgPayoutStakeholders { authority, payout }.into()
}

pub fn send_msg(from_address: Address, to_address: Address, amount: Coin) -> Msg {
    MsgSend {
        from_address,
        to_address,
        amount: vec![amount],
    }
    .into()
}

/// A transaction that is nothing but its messages.
#[derive(Clone, Debug, Default)]
pub struct MockTx {
    msgs: Vec<Msg>,
}

impl MockTx {
    pub fn new(msgs: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            msgs: msgs.into_iter().collect(),
        }
    }
}

impl Tx for MockTx {
    fn msgs(&self) -> &[Msg] {
        &self.msgs
    }
}

/// Oracle returning a fixed rate and counting reads.
#[derive(Debug, Default)]
pub struct CountingOracle {
    rate: InflationRate,
    reads: AtomicUsize,
}

impl CountingOracle {
    pub fn new(rate: InflationRate) -> Self {
        Self {
            rate,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl InflationOracle for CountingOracle {
    fn current_inflation_rate(&self, _ctx: &Context) -> Result<InflationRate, StateError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rate)
    }
}

/// Oracle whose store is always unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingOracle;

impl InflationOracle for FailingOracle {
    fn current_inflation_rate(&self, _ctx: &Context) -> Result<InflationRate, StateError> {
        Err(StateError::Unavailable("minter store offline".into()))
    }
}

/// One call observed by a [`RecordingHandler`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HandledCall {
    pub ctx: Context,
    pub msgs: Vec<Msg>,
    pub simulate: bool,
}

/// Terminal handler that accepts and remembers what reached it.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    calls: Mutex<Vec<HandledCall>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HandledCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl AnteHandler for RecordingHandler {
    fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult {
        self.calls.lock().expect("lock poisoned").push(HandledCall {
            ctx: ctx.clone(),
            msgs: tx.msgs().to_vec(),
            simulate,
        });
        Ok(ctx)
    }
}
