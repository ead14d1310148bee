// Copyright (c) 2024 Botho Foundation

//! The ante pipeline: an ordered chain of decorators run before a
//! transaction's messages execute.
//!
//! Each decorator either rejects the transaction or hands it to the next
//! stage. The chain ends in [`Terminator`], which accepts.
//!
//! ```text
//! AnteChain::handle
//!   └─ decorator[0].ante_handle(ctx, tx, simulate, next)
//!        └─ decorator[1].ante_handle(...)
//!             └─ Terminator
//! ```

use crate::{error::ErrorCode, msg::Tx, MintFilterError};
use displaydoc::Display;
use thiserror::Error;

/// Block-level state a transaction is evaluated against.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Context {
    pub chain_id: String,
    pub block_height: u64,
    /// Mempool admission rather than block execution.
    pub check_tx: bool,
}

impl Context {
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
            check_tx: false,
        }
    }

    pub fn with_check_tx(mut self, check_tx: bool) -> Self {
        self.check_tx = check_tx;
        self
    }
}

/// Errors that stop the ante pipeline.
#[derive(Debug, Display, Error)]
pub enum AnteError {
    /// {0}
    MintFilter(#[from] MintFilterError),

    /// {code}: {log}
    Rejected { code: ErrorCode, log: String },
}

impl AnteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnteError::MintFilter(err) => err.code(),
            AnteError::Rejected { code, .. } => *code,
        }
    }
}

pub type AnteResult = Result<Context, AnteError>;

/// A pipeline stage that can be invoked with a transaction.
pub trait AnteHandler {
    fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult;
}

impl<F> AnteHandler for F
where
    F: Fn(Context, &dyn Tx, bool) -> AnteResult,
{
    fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult {
        self(ctx, tx, simulate)
    }
}

/// A stage that inspects the transaction and decides whether to call `next`.
///
/// On success a decorator returns whatever `next` returns.
pub trait AnteDecorator {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> AnteResult;
}

/// End of the chain: accepts with the context unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminator;

impl AnteHandler for Terminator {
    fn handle(&self, ctx: Context, _tx: &dyn Tx, _simulate: bool) -> AnteResult {
        Ok(ctx)
    }
}

/// Ordered decorators ending in a [`Terminator`].
#[derive(Default)]
pub struct AnteChain {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decorator; it runs after those already in the chain.
    pub fn with(mut self, decorator: impl AnteDecorator + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl AnteHandler for AnteChain {
    fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult {
        Next(&self.decorators).handle(ctx, tx, simulate)
    }
}

/// The remainder of a chain.
struct Next<'a>(&'a [Box<dyn AnteDecorator>]);

impl AnteHandler for Next<'_> {
    fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult {
        match self.0.split_first() {
            Some((decorator, rest)) => decorator.ante_handle(ctx, tx, simulate, &Next(rest)),
            None => Terminator.handle(ctx, tx, simulate),
        }
    }
}
