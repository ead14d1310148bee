// Copyright (c) 2024 Botho Foundation

//! Maps decoded messages onto the categories the mint filter gates.

use crate::{
    coin::{Address, Coin, DenomClass},
    msg::Msg,
};
use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// A category of supply-affecting message subject to the mint filter.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MsgCategory {
    /// manual mint
    ManualMint,
    /// stakeholder payout
    StakeholderPayout,
}

/// A message tagged with its policy category and the supply its coin
/// belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassifiedMsg<'a> {
    ManualMint {
        signer: &'a Address,
        coin: &'a Coin,
        class: DenomClass,
    },
    StakeholderPayout {
        signer: &'a Address,
        coin: &'a Coin,
        class: DenomClass,
    },
    Unclassified,
}

impl<'a> ClassifiedMsg<'a> {
    pub fn category(&self) -> Option<MsgCategory> {
        match self {
            ClassifiedMsg::ManualMint { .. } => Some(MsgCategory::ManualMint),
            ClassifiedMsg::StakeholderPayout { .. } => Some(MsgCategory::StakeholderPayout),
            ClassifiedMsg::Unclassified => None,
        }
    }

    /// The acting identity and coin of a gated message.
    pub fn subject(&self) -> Option<(&'a Address, &'a Coin)> {
        match *self {
            ClassifiedMsg::ManualMint { signer, coin, .. }
            | ClassifiedMsg::StakeholderPayout { signer, coin, .. } => Some((signer, coin)),
            ClassifiedMsg::Unclassified => None,
        }
    }

    pub fn denom_class(&self) -> Option<DenomClass> {
        match *self {
            ClassifiedMsg::ManualMint { class, .. }
            | ClassifiedMsg::StakeholderPayout { class, .. } => Some(class),
            ClassifiedMsg::Unclassified => None,
        }
    }
}

/// Classify a message from its type and the denomination it carries.
///
/// `native_denom` is the protocol-controlled denomination. Adding a gated
/// message kind means adding an arm here and, if needed, a [`MsgCategory`]
/// variant.
pub fn classify<'a>(msg: &'a Msg, native_denom: &str) -> ClassifiedMsg<'a> {
    match msg {
        Msg::TokenFactoryMint(mint) => ClassifiedMsg::ManualMint {
            signer: &mint.sender,
            coin: &mint.amount,
            class: DenomClass::of(mint.amount.denom(), native_denom),
        },
        Msg::PayoutStakeholders(payout) => ClassifiedMsg::StakeholderPayout {
            signer: &payout.authority,
            coin: &payout.payout,
            class: DenomClass::of(payout.payout.denom(), native_denom),
        },
        Msg::TokenFactoryBurn(_) | Msg::BankSend(_) | Msg::Other { .. } => {
            ClassifiedMsg::Unclassified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{MsgBurn, MsgMint, MsgPayoutStakeholders, MsgSend};

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn coin_of(denom: &str, amount: u64) -> Coin {
        Coin::new(denom, amount).unwrap()
    }

    #[test]
    fn test_mint_is_manual_mint() {
        let msg: Msg = MsgMint {
            sender: addr("bth1admin"),
            amount: coin_of("factory", 3),
            mint_to_address: Some(addr("bth1user")),
        }
        .into();

        let classified = classify(&msg, "ubth");
        assert_eq!(classified.category(), Some(MsgCategory::ManualMint));
        let (signer, coin) = classified.subject().unwrap();
        assert_eq!(signer.as_str(), "bth1admin");
        assert_eq!(coin, &coin_of("factory", 3));
    }

    #[test]
    fn test_payout_is_stakeholder_payout() {
        let msg: Msg = MsgPayoutStakeholders {
            authority: addr("bth1admin"),
            payout: coin_of("ubth", 1),
        }
        .into();

        let classified = classify(&msg, "ubth");
        assert_eq!(classified.category(), Some(MsgCategory::StakeholderPayout));
        assert_eq!(classified.subject().unwrap().0.as_str(), "bth1admin");
    }

    #[test]
    fn test_denom_class_follows_native_denom() {
        let payout: Msg = MsgPayoutStakeholders {
            authority: addr("bth1admin"),
            payout: coin_of("umfx", 1),
        }
        .into();
        let mint: Msg = MsgMint {
            sender: addr("bth1admin"),
            amount: coin_of("factory/bth1admin/ufoo", 1),
            mint_to_address: None,
        }
        .into();

        assert_eq!(
            classify(&payout, "umfx").denom_class(),
            Some(DenomClass::Native)
        );
        assert_eq!(
            classify(&payout, "ubth").denom_class(),
            Some(DenomClass::Independent)
        );
        assert_eq!(
            classify(&mint, "umfx").denom_class(),
            Some(DenomClass::Independent)
        );
        let other = Msg::Other {
            type_url: "/bth.bank.v1.MsgMultiSend".to_string(),
        };
        assert_eq!(classify(&other, "umfx").denom_class(), None);
    }

    #[test]
    fn test_other_messages_are_unclassified() {
        let msgs: Vec<Msg> = vec![
            MsgBurn {
                sender: addr("bth1admin"),
                amount: coin_of("ubth", 1),
            }
            .into(),
            MsgSend {
                from_address: addr("bth1admin"),
                to_address: addr("bth1user"),
                amount: vec![coin_of("ubth", 1)],
            }
            .into(),
            Msg::Other {
                type_url: "/bth.tokenfactory.v1.MsgMintLike".to_string(),
            },
        ];

        for msg in &msgs {
            let classified = classify(msg, "ubth");
            assert_eq!(classified, ClassifiedMsg::Unclassified);
            assert_eq!(classified.category(), None);
            assert_eq!(classified.subject(), None);
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(MsgCategory::ManualMint.to_string(), "manual mint");
        assert_eq!(MsgCategory::StakeholderPayout.to_string(), "stakeholder payout");
    }
}
