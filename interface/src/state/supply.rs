use static_assertions::const_assert_eq;

use crate::{
    error::{WardrobeError, WardrobeResult},
    state::{
        collectible::{BadgeTier, NUM_BADGE_TIERS},
        transmutable::Transmutable,
        LeU16, LeU64,
    },
};

pub const SUPPLY_ACCOUNT_SIZE: usize = 32;
pub const SUPPLY_ACCOUNT_DISCRIMINANT: u64 = 0xdecafc0ffee00004;

/// The singleton badge supply counter.
///
/// Caps how many badges of each tier can ever be minted. Maxima are fixed at initialization.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct SupplyAccount {
    /// The u64 supply account discriminant as LE bytes.
    discriminant: LeU64,
    /// Per-tier count of badges minted so far, as LE bytes.
    minted: [LeU16; NUM_BADGE_TIERS],
    /// Per-tier maximum supply, as LE bytes.
    maxima: [LeU16; NUM_BADGE_TIERS],
    /// The bump for the supply PDA.
    pub bump: u8,
    _padding: [u8; 3],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: no enums, bools, or other types with invalid states.
unsafe impl Transmutable for SupplyAccount {
    const LEN: usize = SUPPLY_ACCOUNT_SIZE;
}

const_assert_eq!(SUPPLY_ACCOUNT_SIZE, size_of::<SupplyAccount>());
const_assert_eq!(align_of::<SupplyAccount>(), 1);

impl SupplyAccount {
    pub fn init(maxima: [u16; NUM_BADGE_TIERS], bump: u8) -> Self {
        SupplyAccount {
            discriminant: SUPPLY_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            minted: [[0; 2]; NUM_BADGE_TIERS],
            maxima: maxima.map(u16::to_le_bytes),
            bump,
            _padding: [0; 3],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> WardrobeResult {
        if u64::from_le_bytes(self.discriminant) != SUPPLY_ACCOUNT_DISCRIMINANT {
            return Err(WardrobeError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn minted(&self, tier: BadgeTier) -> u16 {
        u16::from_le_bytes(self.minted[tier.tier_index()])
    }

    #[inline(always)]
    pub fn max_supply(&self, tier: BadgeTier) -> u16 {
        u16::from_le_bytes(self.maxima[tier.tier_index()])
    }

    /// Counts one more badge of `tier` minted, failing once the tier's maximum is reached.
    pub fn increment(&mut self, tier: BadgeTier) -> WardrobeResult {
        let minted = self.minted(tier);
        if minted >= self.max_supply(tier) {
            return Err(WardrobeError::SupplyExhausted);
        }
        self.minted[tier.tier_index()] = (minted + 1).to_le_bytes();
        Ok(())
    }
}

/// Writes a freshly initialized [`SupplyAccount`] into `bytes` and returns a mutable view of it.
///
/// `bytes` must be exactly [`SUPPLY_ACCOUNT_SIZE`] long.
pub fn initialize_supply_account(
    bytes: &mut [u8],
    maxima: [u16; NUM_BADGE_TIERS],
    bump: u8,
) -> Result<&mut SupplyAccount, WardrobeError> {
    // Safety: All bit patterns are valid for `SupplyAccount`, and the contents are overwritten
    // before the reference is returned.
    let account = unsafe { crate::state::transmutable::load_mut::<SupplyAccount>(bytes) }?;
    *account = SupplyAccount::init(maxima, bump);
    Ok(account)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn counts_up_to_the_maximum() {
        let mut supply = SupplyAccount::init([2, 0, 0, 0, 0], 255);
        supply.verify_discriminant().unwrap();
        supply.increment(BadgeTier::Bronze).unwrap();
        supply.increment(BadgeTier::Bronze).unwrap();
        assert_eq!(supply.minted(BadgeTier::Bronze), 2);
        assert_eq!(
            supply.increment(BadgeTier::Bronze),
            Err(WardrobeError::SupplyExhausted)
        );
        assert_eq!(supply.minted(BadgeTier::Bronze), 2);
    }

    #[test]
    fn a_zero_maximum_blocks_the_first_mint() {
        let mut supply = SupplyAccount::init([0; NUM_BADGE_TIERS], 255);
        for tier in BadgeTier::iter() {
            assert_eq!(supply.increment(tier), Err(WardrobeError::SupplyExhausted));
        }
    }

    #[test]
    fn tiers_count_independently() {
        let mut supply = SupplyAccount::init([1, 2, 3, 4, 5], 255);
        supply.increment(BadgeTier::Diamond).unwrap();
        for tier in BadgeTier::iter() {
            assert_eq!(supply.max_supply(tier), tier as u16);
            let expected = if tier == BadgeTier::Diamond { 1 } else { 0 };
            assert_eq!(supply.minted(tier), expected);
        }
    }
}
