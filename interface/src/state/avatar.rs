use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    constants::MAX_ALIAS_LEN,
    error::{WardrobeError, WardrobeResult},
    state::{
        registered_trait::{TraitKind, NUM_TRAIT_SLOTS},
        transmutable::Transmutable,
        LeU64,
    },
};

pub const AVATAR_ACCOUNT_SIZE: usize = 80;
pub const AVATAR_ACCOUNT_DISCRIMINANT: u64 = 0xdecafc0ffee00001;

/// Per-avatar customization state.
///
/// One avatar PDA exists per avatar mint. Slots are write-once: equipping burns the trait token,
/// so clearing a slot would destroy value with nothing to return.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct AvatarAccount {
    /// The u64 avatar account discriminant as LE bytes.
    discriminant: LeU64,
    /// The avatar's mint public key.
    pub avatar_mint: Pubkey,
    /// The bump for the avatar PDA.
    pub bump: u8,
    /// One byte per [`TraitKind`] slot; nonzero means the slot has been filled.
    slots: [u8; NUM_TRAIT_SLOTS],
    /// The number of meaningful bytes in `alias`.
    alias_len: u8,
    /// The avatar's alias bytes, valid up to `alias_len`.
    alias: [u8; MAX_ALIAS_LEN],
    _padding: [u8; 1],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: slots are raw bytes, the alias is raw bytes.
unsafe impl Transmutable for AvatarAccount {
    const LEN: usize = AVATAR_ACCOUNT_SIZE;
}

const_assert_eq!(AVATAR_ACCOUNT_SIZE, size_of::<AvatarAccount>());
const_assert_eq!(align_of::<AvatarAccount>(), 1);

impl AvatarAccount {
    pub fn init(avatar_mint: &Pubkey, bump: u8) -> Self {
        AvatarAccount {
            discriminant: AVATAR_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            avatar_mint: *avatar_mint,
            bump,
            slots: [0; NUM_TRAIT_SLOTS],
            alias_len: 0,
            alias: [0; MAX_ALIAS_LEN],
            _padding: [0; 1],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> WardrobeResult {
        if u64::from_le_bytes(self.discriminant) != AVATAR_ACCOUNT_DISCRIMINANT {
            return Err(WardrobeError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn slot_is_filled(&self, kind: TraitKind) -> bool {
        self.slots[kind.slot_index()] != 0
    }

    /// Fills the slot for `kind`, failing if a trait of that kind was already equipped.
    pub fn fill_slot(&mut self, kind: TraitKind) -> WardrobeResult {
        if self.slot_is_filled(kind) {
            return Err(WardrobeError::SlotTaken);
        }
        self.slots[kind.slot_index()] = 1;
        Ok(())
    }

    /// The avatar's alias bytes.
    #[inline(always)]
    pub fn alias(&self) -> &[u8] {
        &self.alias[..self.alias_len as usize]
    }

    /// Overwrites the alias, failing if `alias` exceeds [`MAX_ALIAS_LEN`] bytes.
    pub fn set_alias(&mut self, alias: &[u8]) -> WardrobeResult {
        if alias.len() > MAX_ALIAS_LEN {
            return Err(WardrobeError::AliasTooLong);
        }
        self.alias = [0; MAX_ALIAS_LEN];
        self.alias[..alias.len()].copy_from_slice(alias);
        self.alias_len = alias.len() as u8;
        Ok(())
    }
}

/// Writes a freshly initialized [`AvatarAccount`] into `bytes` and returns a mutable view of it.
///
/// `bytes` must be exactly [`AVATAR_ACCOUNT_SIZE`] long.
pub fn initialize_avatar_account<'a>(
    bytes: &'a mut [u8],
    avatar_mint: &Pubkey,
    bump: u8,
) -> Result<&'a mut AvatarAccount, WardrobeError> {
    // Safety: All bit patterns are valid for `AvatarAccount`, and the contents are overwritten
    // before the reference is returned.
    let account = unsafe { crate::state::transmutable::load_mut::<AvatarAccount>(bytes) }?;
    *account = AvatarAccount::init(avatar_mint, bump);
    Ok(account)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn fresh_avatar_has_empty_slots_and_no_alias() {
        let avatar = AvatarAccount::init(&[1u8; 32], 255);
        avatar.verify_discriminant().unwrap();
        for kind in TraitKind::iter() {
            assert!(!avatar.slot_is_filled(kind));
        }
        assert!(avatar.alias().is_empty());
    }

    #[test]
    fn slots_fill_once() {
        let mut avatar = AvatarAccount::init(&[1u8; 32], 255);
        avatar.fill_slot(TraitKind::Eyes).unwrap();
        assert!(avatar.slot_is_filled(TraitKind::Eyes));
        assert_eq!(
            avatar.fill_slot(TraitKind::Eyes),
            Err(WardrobeError::SlotTaken)
        );
        // Other slots are unaffected.
        assert!(!avatar.slot_is_filled(TraitKind::Hat));
        avatar.fill_slot(TraitKind::Hat).unwrap();
    }

    #[test]
    fn alias_roundtrip_and_bounds() {
        let mut avatar = AvatarAccount::init(&[1u8; 32], 255);
        avatar.set_alias(b"agent ultramarine").unwrap();
        assert_eq!(avatar.alias(), b"agent ultramarine");

        // Shorter aliases fully replace longer ones.
        avatar.set_alias(b"m").unwrap();
        assert_eq!(avatar.alias(), b"m");

        assert_eq!(
            avatar.set_alias(&[b'x'; MAX_ALIAS_LEN + 1]),
            Err(WardrobeError::AliasTooLong)
        );
        // The failed call returns before any bytes are written.
        assert_eq!(avatar.alias(), b"m");

        avatar.set_alias(&[b'y'; MAX_ALIAS_LEN]).unwrap();
        assert_eq!(avatar.alias().len(), MAX_ALIAS_LEN);
    }
}
