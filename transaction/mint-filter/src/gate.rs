// Copyright (c) 2024 Botho Foundation

//! The mint filter ante decorator.
//!
//! Protocol inflation and administrator mints both grow the controlled
//! supply. While the inflation rate is above zero, token-factory mints and
//! stakeholder payouts signed by a proof-of-authority admin are rejected.
//! Non-admin issuance is never touched, and neither is any other message.

use crate::{
    ante::{AnteDecorator, AnteHandler, AnteResult, Context},
    classify::{classify, MsgCategory},
    coin::{Address, DenomClass},
    config::{DenomPolicy, MintFilterConfig, DEFAULT_NATIVE_DENOM},
    error::MintFilterError,
    inflation::InflationRate,
    msg::Tx,
    state::{AdminDirectory, InflationOracle},
};
use tracing::{debug, warn};

/// Outcome of evaluating one gated message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolicyDecision {
    Allow,
    Reject(MsgCategory),
}

/// Rejects admin manual mints and stakeholder payouts while inflation is on.
pub struct MintFilterDecorator<O, A> {
    oracle: O,
    admins: A,
    native_denom: String,
    denom_policy: DenomPolicy,
}

impl<O: InflationOracle, A: AdminDirectory> MintFilterDecorator<O, A> {
    /// A filter with the default configuration.
    pub fn new(oracle: O, admins: A) -> Self {
        Self {
            oracle,
            admins,
            native_denom: DEFAULT_NATIVE_DENOM.to_string(),
            denom_policy: DenomPolicy::default(),
        }
    }

    /// A filter for `config`, which must pass [`MintFilterConfig::validate`].
    pub fn with_config(oracle: O, admins: A, config: &MintFilterConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            oracle,
            admins,
            native_denom: config.native_denom.clone(),
            denom_policy: config.denom_policy,
        })
    }

    /// Decide whether `tx` may proceed.
    ///
    /// Messages are scanned in order and the first rejected one is reported.
    /// The inflation rate is read at most once, and only if the transaction
    /// carries a gated message.
    pub fn admit(&self, ctx: &Context, tx: &dyn Tx) -> Result<(), MintFilterError> {
        let mut inflation: Option<InflationRate> = None;

        for (index, msg) in tx.msgs().iter().enumerate() {
            let classified = classify(msg, &self.native_denom);
            let (category, (signer, coin), class) = match (
                classified.category(),
                classified.subject(),
                classified.denom_class(),
            ) {
                (Some(category), Some(subject), Some(class)) => (category, subject, class),
                _ => continue,
            };

            let rate = match inflation {
                Some(rate) => rate,
                None => {
                    let rate = self.oracle.current_inflation_rate(ctx).map_err(|err| {
                        warn!(
                            chain_id = %ctx.chain_id,
                            height = ctx.block_height,
                            check_tx = ctx.check_tx,
                            error = %err,
                            "Failed to read inflation rate"
                        );
                        MintFilterError::GettingMinter(err)
                    })?;
                    *inflation.insert(rate)
                }
            };

            match self.evaluate(ctx, category, signer, class, rate)? {
                PolicyDecision::Allow => {
                    debug!(
                        index,
                        type_url = msg.type_url(),
                        %category,
                        %signer,
                        %coin,
                        %class,
                        %rate,
                        "Gated message allowed"
                    );
                }
                PolicyDecision::Reject(category) => {
                    warn!(
                        chain_id = %ctx.chain_id,
                        height = ctx.block_height,
                        check_tx = ctx.check_tx,
                        index,
                        type_url = msg.type_url(),
                        %category,
                        %signer,
                        %coin,
                        %rate,
                        "Admin manual minting rejected while inflation is enabled"
                    );
                    return Err(MintFilterError::ManualMintingDisabled { category, index });
                }
            }
        }

        Ok(())
    }

    /// Apply the admission rule to one gated message whose coin is of
    /// `class`.
    pub fn evaluate(
        &self,
        ctx: &Context,
        category: MsgCategory,
        signer: &Address,
        class: DenomClass,
        rate: InflationRate,
    ) -> Result<PolicyDecision, MintFilterError> {
        if rate.is_zero() || !self.denom_policy.covers(class) {
            return Ok(PolicyDecision::Allow);
        }

        let is_admin = self.admins.is_admin(ctx, signer).map_err(|err| {
            warn!(
                chain_id = %ctx.chain_id,
                height = ctx.block_height,
                %signer,
                error = %err,
                "Failed to read admin set"
            );
            MintFilterError::GettingAdmins(err)
        })?;

        Ok(if is_admin {
            PolicyDecision::Reject(category)
        } else {
            PolicyDecision::Allow
        })
    }
}

impl<O: InflationOracle, A: AdminDirectory> AnteDecorator for MintFilterDecorator<O, A> {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> AnteResult {
        self.admit(&ctx, tx)?;
        next.handle(ctx, tx, simulate)
    }
}
