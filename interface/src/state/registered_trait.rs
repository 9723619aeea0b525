use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{WardrobeError, WardrobeResult},
    state::{transmutable::Transmutable, LeU64},
};

/// The number of trait slots on an avatar, one per [`TraitKind`].
pub const NUM_TRAIT_SLOTS: usize = 5;

/// The customization slot a trait occupies on an avatar.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr))]
#[cfg_attr(any(test, feature = "std"), derive(strum_macros::EnumIter, strum_macros::Display))]
pub enum TraitKind {
    Skin = 1,
    Clothing,
    Eyes,
    Hat,
    Mouth,
}

impl TraitKind {
    /// The zero-based index of this kind's slot in an avatar's slot array.
    #[inline(always)]
    pub fn slot_index(&self) -> usize {
        *self as usize - 1
    }
}

impl TryFrom<u8> for TraitKind {
    type Error = WardrobeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive trait kind test.
            1..6 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(WardrobeError::InvalidTraitKind),
        }
    }
}

pub const TRAIT_ACCOUNT_SIZE: usize = 48;
pub const TRAIT_ACCOUNT_DISCRIMINANT: u64 = 0xdecafc0ffee00002;

/// The registration record for a trait mint, created by the wardrobe authority.
///
/// Its existence is the trait's proof of provenance: only registered trait mints can be equipped,
/// and the record pins which slot kind the trait occupies.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct TraitAccount {
    /// The u64 trait account discriminant as LE bytes.
    discriminant: LeU64,
    /// The trait's mint public key.
    pub trait_mint: Pubkey,
    /// The bump for the trait PDA.
    pub bump: u8,
    /// The [`TraitKind`] this trait occupies, stored as its u8 repr.
    kind: u8,
    _padding: [u8; 6],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: `kind` is a raw byte validated on access.
unsafe impl Transmutable for TraitAccount {
    const LEN: usize = TRAIT_ACCOUNT_SIZE;
}

const_assert_eq!(TRAIT_ACCOUNT_SIZE, size_of::<TraitAccount>());
const_assert_eq!(align_of::<TraitAccount>(), 1);

impl TraitAccount {
    pub fn init(trait_mint: &Pubkey, kind: TraitKind, bump: u8) -> Self {
        TraitAccount {
            discriminant: TRAIT_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            trait_mint: *trait_mint,
            bump,
            kind: kind as u8,
            _padding: [0; 6],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> WardrobeResult {
        if u64::from_le_bytes(self.discriminant) != TRAIT_ACCOUNT_DISCRIMINANT {
            return Err(WardrobeError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    /// The trait's slot kind, validated from its stored byte.
    #[inline(always)]
    pub fn kind(&self) -> Result<TraitKind, WardrobeError> {
        TraitKind::try_from(self.kind)
    }
}

/// Writes a freshly initialized [`TraitAccount`] into `bytes` and returns a mutable view of it.
///
/// `bytes` must be exactly [`TRAIT_ACCOUNT_SIZE`] long.
pub fn initialize_trait_account<'a>(
    bytes: &'a mut [u8],
    trait_mint: &Pubkey,
    kind: TraitKind,
    bump: u8,
) -> Result<&'a mut TraitAccount, WardrobeError> {
    // Safety: All bit patterns are valid for `TraitAccount`, and the contents are overwritten
    // before the reference is returned.
    let account = unsafe { crate::state::transmutable::load_mut::<TraitAccount>(bytes) }?;
    *account = TraitAccount::init(trait_mint, kind, bump);
    Ok(account)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn trait_kind_from_u8_exhaustive() {
        for variant in TraitKind::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                TraitKind::from_repr(variant_u8).unwrap(),
                TraitKind::try_from(variant_u8).unwrap(),
            );
            assert_eq!(TraitKind::try_from(variant_u8).unwrap(), variant);
        }
        assert_eq!(
            TraitKind::try_from(0),
            Err(WardrobeError::InvalidTraitKind)
        );
        assert_eq!(
            TraitKind::try_from(NUM_TRAIT_SLOTS as u8 + 1),
            Err(WardrobeError::InvalidTraitKind)
        );
    }

    #[test]
    fn slot_indices_cover_the_slot_array() {
        let indices: std::vec::Vec<usize> = TraitKind::iter().map(|k| k.slot_index()).collect();
        assert_eq!(indices, std::vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn init_then_read_back() {
        let mint = [7u8; 32];
        let account = TraitAccount::init(&mint, TraitKind::Hat, 254);
        account.verify_discriminant().unwrap();
        assert_eq!(account.trait_mint, mint);
        assert_eq!(account.kind().unwrap(), TraitKind::Hat);
        assert_eq!(account.bump, 254);
    }
}
