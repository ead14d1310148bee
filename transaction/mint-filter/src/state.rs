// Copyright (c) 2024 Botho Foundation

//! Read-only views of the chain state the mint filter consults.
//!
//! The minter record and the proof-of-authority admin set are owned and
//! written by other modules. The filter only reads them through
//! [`InflationOracle`] and [`AdminDirectory`].

use crate::{ante::Context, coin::Address, inflation::InflationRate};
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    sync::{Arc, RwLock},
};
use thiserror::Error;

/// Failure to read a value from a state store.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum StateError {
    /// State entry not found: {0}
    NotFound(String),

    /// State store unavailable: {0}
    Unavailable(String),

    /// State entry is corrupt: {0}
    Corrupt(String),
}

/// Source of the current protocol inflation rate.
pub trait InflationOracle {
    /// Inflation rate as of `ctx`.
    ///
    /// A failed read is an error, never an implicit zero.
    fn current_inflation_rate(&self, ctx: &Context) -> Result<InflationRate, StateError>;
}

impl<T: InflationOracle + ?Sized> InflationOracle for &T {
    fn current_inflation_rate(&self, ctx: &Context) -> Result<InflationRate, StateError> {
        (**self).current_inflation_rate(ctx)
    }
}

impl<T: InflationOracle + ?Sized> InflationOracle for Arc<T> {
    fn current_inflation_rate(&self, ctx: &Context) -> Result<InflationRate, StateError> {
        (**self).current_inflation_rate(ctx)
    }
}

/// Membership test against the proof-of-authority admin set.
pub trait AdminDirectory {
    fn is_admin(&self, ctx: &Context, address: &Address) -> Result<bool, StateError>;
}

/// An infallible predicate, e.g. a keeper's `is_admin` method, is a directory.
impl<F> AdminDirectory for F
where
    F: Fn(&Context, &Address) -> bool,
{
    fn is_admin(&self, ctx: &Context, address: &Address) -> Result<bool, StateError> {
        Ok(self(ctx, address))
    }
}

/// The minting module's persisted record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Minter {
    pub inflation: InflationRate,
    pub annual_provisions: u128,
}

impl Minter {
    /// A fresh minter at `inflation`, with no provisions accrued yet.
    pub fn initial(inflation: InflationRate) -> Self {
        Self {
            inflation,
            annual_provisions: 0,
        }
    }
}

/// Shared handle on the minter record.
///
/// Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MinterStore {
    inner: Arc<RwLock<Option<Minter>>>,
}

impl MinterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minter(minter: Minter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(minter))),
        }
    }

    /// Replace the stored record.
    pub fn set_minter(&self, minter: Minter) -> Result<(), StateError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StateError::Unavailable("minter lock poisoned".into()))?;
        *inner = Some(minter);
        Ok(())
    }

    /// Remove the stored record.
    pub fn clear(&self) -> Result<(), StateError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StateError::Unavailable("minter lock poisoned".into()))?;
        *inner = None;
        Ok(())
    }

    pub fn minter(&self) -> Result<Minter, StateError> {
        self.inner
            .read()
            .map_err(|_| StateError::Unavailable("minter lock poisoned".into()))?
            .clone()
            .ok_or_else(|| StateError::NotFound("minter".into()))
    }
}

impl InflationOracle for MinterStore {
    fn current_inflation_rate(&self, _ctx: &Context) -> Result<InflationRate, StateError> {
        self.minter().map(|minter| minter.inflation)
    }
}

/// Shared handle on the proof-of-authority admin set.
///
/// Clones share the same set.
#[derive(Clone, Debug, Default)]
pub struct PoaAdminSet {
    inner: Arc<RwLock<BTreeSet<Address>>>,
}

impl PoaAdminSet {
    pub fn new(admins: impl IntoIterator<Item = Address>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(admins.into_iter().collect())),
        }
    }

    /// Replace the whole set, as a governance update would.
    pub fn set_admins(&self, admins: impl IntoIterator<Item = Address>) -> Result<(), StateError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StateError::Unavailable("admin set lock poisoned".into()))?;
        *inner = admins.into_iter().collect();
        Ok(())
    }

    pub fn contains(&self, address: &Address) -> Result<bool, StateError> {
        self.inner
            .read()
            .map(|admins| admins.contains(address))
            .map_err(|_| StateError::Unavailable("admin set lock poisoned".into()))
    }

    pub fn len(&self) -> Result<usize, StateError> {
        self.inner
            .read()
            .map(|admins| admins.len())
            .map_err(|_| StateError::Unavailable("admin set lock poisoned".into()))
    }

    pub fn is_empty(&self) -> Result<bool, StateError> {
        self.len().map(|len| len == 0)
    }
}

impl AdminDirectory for PoaAdminSet {
    fn is_admin(&self, _ctx: &Context, address: &Address) -> Result<bool, StateError> {
        self.contains(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_unset_minter_is_not_found() {
        let store = MinterStore::new();
        assert_eq!(
            store.current_inflation_rate(&Context::default()),
            Err(StateError::NotFound("minter".into()))
        );
    }

    #[test]
    fn test_minter_store_reads_latest_rate() {
        let store = MinterStore::with_minter(Minter::initial(InflationRate::ZERO));
        let ctx = Context::default();
        assert_eq!(store.current_inflation_rate(&ctx), Ok(InflationRate::ZERO));

        let shared = store.clone();
        let one_percent = InflationRate::with_prec(1, 2).unwrap();
        shared.set_minter(Minter::initial(one_percent)).unwrap();
        assert_eq!(store.current_inflation_rate(&ctx), Ok(one_percent));

        store.clear().unwrap();
        assert!(store.current_inflation_rate(&ctx).is_err());
    }

    #[test]
    fn test_poa_admin_set_membership() {
        let admins = PoaAdminSet::new([addr("bth1admin")]);
        let ctx = Context::default();
        assert_eq!(admins.is_admin(&ctx, &addr("bth1admin")), Ok(true));
        assert_eq!(admins.is_admin(&ctx, &addr("bth1user")), Ok(false));
        assert_eq!(admins.len(), Ok(1));

        admins.set_admins([addr("bth1user")]).unwrap();
        assert_eq!(admins.is_admin(&ctx, &addr("bth1admin")), Ok(false));
        assert_eq!(admins.is_admin(&ctx, &addr("bth1user")), Ok(true));
    }

    #[test]
    fn test_poisoned_admin_set_is_unavailable() {
        let admins = PoaAdminSet::new([addr("bth1admin")]);
        let shared = admins.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.inner.write().unwrap();
            panic!("poison the admin set");
        })
        .join();

        assert_matches!(admins.len(), Err(StateError::Unavailable(_)));
        assert!(admins.is_empty().is_err());
        assert_matches!(
            admins.is_admin(&Context::default(), &addr("bth1admin")),
            Err(StateError::Unavailable(_))
        );
    }

    #[test]
    fn test_closure_is_admin_directory() {
        let admin = addr("bth1admin");
        let directory = |_: &Context, address: &Address| address.as_str() == "bth1admin";
        let ctx = Context::default();
        assert_eq!(directory.is_admin(&ctx, &admin), Ok(true));
        assert_eq!(directory.is_admin(&ctx, &addr("bth1user")), Ok(false));
    }
}
