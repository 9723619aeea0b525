use pinocchio::pubkey::Pubkey;

use crate::{constants, error::WardrobeError};

/// The badge tiers, in redemption order. The discriminant doubles as the rank a redeemed badge
/// confers.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr))]
#[cfg_attr(any(test, feature = "std"), derive(strum_macros::EnumIter, strum_macros::Display))]
pub enum BadgeTier {
    Bronze = 1,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

/// The number of badge tiers tracked by the supply account.
pub const NUM_BADGE_TIERS: usize = 5;

impl BadgeTier {
    /// The zero-based index of this tier in the supply account's counters.
    #[inline(always)]
    pub fn tier_index(&self) -> usize {
        *self as usize - 1
    }
}

/// A fungible asset minted by the treasury for a fixed credit price.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr))]
#[cfg_attr(any(test, feature = "std"), derive(strum_macros::EnumIter, strum_macros::Display))]
pub enum Collectible {
    IdCard = 1,
    BadgeBronze,
    BadgeSilver,
    BadgeGold,
    BadgePlatinum,
    BadgeDiamond,
}

impl TryFrom<u8> for Collectible {
    type Error = WardrobeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive collectible test.
            1..7 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(WardrobeError::UnknownCollectible),
        }
    }
}

impl Collectible {
    /// The hard-coded mint address for this collectible.
    pub fn mint(&self) -> &'static Pubkey {
        match self {
            Collectible::IdCard => &constants::ID_CARD_MINT,
            Collectible::BadgeBronze => &constants::BADGE_BRONZE_MINT,
            Collectible::BadgeSilver => &constants::BADGE_SILVER_MINT,
            Collectible::BadgeGold => &constants::BADGE_GOLD_MINT,
            Collectible::BadgePlatinum => &constants::BADGE_PLATINUM_MINT,
            Collectible::BadgeDiamond => &constants::BADGE_DIAMOND_MINT,
        }
    }

    /// The price in base units of the credit token.
    pub fn price(&self) -> u64 {
        match self {
            Collectible::IdCard => constants::PRICE_ID_CARD,
            Collectible::BadgeBronze => constants::PRICE_BADGE_BRONZE,
            Collectible::BadgeSilver => constants::PRICE_BADGE_SILVER,
            Collectible::BadgeGold => constants::PRICE_BADGE_GOLD,
            Collectible::BadgePlatinum => constants::PRICE_BADGE_PLATINUM,
            Collectible::BadgeDiamond => constants::PRICE_BADGE_DIAMOND,
        }
    }

    /// The badge tier this collectible confers, or `None` for the ID card.
    pub fn badge_tier(&self) -> Option<BadgeTier> {
        match self {
            Collectible::IdCard => None,
            Collectible::BadgeBronze => Some(BadgeTier::Bronze),
            Collectible::BadgeSilver => Some(BadgeTier::Silver),
            Collectible::BadgeGold => Some(BadgeTier::Gold),
            Collectible::BadgePlatinum => Some(BadgeTier::Platinum),
            Collectible::BadgeDiamond => Some(BadgeTier::Diamond),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn collectible_from_u8_exhaustive() {
        for variant in Collectible::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                Collectible::from_repr(variant_u8).unwrap(),
                Collectible::try_from(variant_u8).unwrap(),
            );
            assert_eq!(Collectible::try_from(variant_u8).unwrap(), variant);
        }
        assert_eq!(
            Collectible::try_from(0),
            Err(WardrobeError::UnknownCollectible)
        );
        assert_eq!(
            Collectible::try_from(7),
            Err(WardrobeError::UnknownCollectible)
        );
    }

    #[test]
    fn badge_tiers_line_up_with_collectibles() {
        assert_eq!(Collectible::IdCard.badge_tier(), None);
        for (collectible, tier) in Collectible::iter().skip(1).zip(BadgeTier::iter()) {
            assert_eq!(collectible.badge_tier(), Some(tier));
            assert_eq!(tier.tier_index(), tier as usize - 1);
        }
    }

    #[test]
    fn prices_rise_with_tier() {
        let mut last = 0;
        for tier in Collectible::iter().skip(1) {
            assert!(tier.price() >= last);
            last = tier.price();
        }
    }

    #[test]
    fn mints_are_distinct() {
        for a in Collectible::iter() {
            for b in Collectible::iter() {
                if a != b {
                    assert_ne!(a.mint(), b.mint(), "{a} and {b} share a mint");
                }
            }
        }
    }
}
