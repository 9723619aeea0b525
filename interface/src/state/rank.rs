use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{WardrobeError, WardrobeResult},
    state::{collectible::BadgeTier, transmutable::Transmutable, LeU64},
};

pub const RANK_ACCOUNT_SIZE: usize = 48;
pub const RANK_ACCOUNT_DISCRIMINANT: u64 = 0xdecafc0ffee00003;

/// Per-avatar badge progression.
///
/// `rank` is the highest redeemed badge tier (0 before any badge). `minted` tracks the highest
/// minted tier and is either equal to `rank` (nothing outstanding) or `rank + 1` (a badge was
/// minted and hasn't been redeemed yet). Both mint and redeem move strictly one tier at a time.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct RankAccount {
    /// The u64 rank account discriminant as LE bytes.
    discriminant: LeU64,
    /// The avatar's mint public key.
    pub avatar_mint: Pubkey,
    /// The bump for the rank PDA.
    pub bump: u8,
    /// The highest redeemed badge tier.
    rank: u8,
    /// The highest minted badge tier.
    minted: u8,
    _padding: [u8; 5],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: tiers are raw bytes validated on use.
unsafe impl Transmutable for RankAccount {
    const LEN: usize = RANK_ACCOUNT_SIZE;
}

const_assert_eq!(RANK_ACCOUNT_SIZE, size_of::<RankAccount>());
const_assert_eq!(align_of::<RankAccount>(), 1);

impl RankAccount {
    pub fn init(avatar_mint: &Pubkey, bump: u8) -> Self {
        RankAccount {
            discriminant: RANK_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            avatar_mint: *avatar_mint,
            bump,
            rank: 0,
            minted: 0,
            _padding: [0; 5],
        }
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> WardrobeResult {
        if u64::from_le_bytes(self.discriminant) != RANK_ACCOUNT_DISCRIMINANT {
            return Err(WardrobeError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline(always)]
    pub fn minted(&self) -> u8 {
        self.minted
    }

    /// Checks that `tier` is the next badge this avatar is allowed to mint: exactly one above the
    /// current rank, with no unredeemed badge outstanding.
    pub fn check_mint_allowed(&self, tier: BadgeTier) -> WardrobeResult {
        if self.minted != self.rank {
            return Err(WardrobeError::BadgeAlreadyOutstanding);
        }
        if tier as u8 != self.rank + 1 {
            return Err(WardrobeError::BadgeTierNotNext);
        }
        Ok(())
    }

    /// Records that the badge for `tier` was minted. Call after [`Self::check_mint_allowed`].
    #[inline(always)]
    pub fn record_mint(&mut self, tier: BadgeTier) {
        self.minted = tier as u8;
    }

    /// Redeems the outstanding badge of `tier`, raising the rank to it.
    pub fn redeem(&mut self, tier: BadgeTier) -> WardrobeResult {
        if self.minted == self.rank {
            return Err(WardrobeError::NoBadgeOutstanding);
        }
        if tier as u8 != self.minted {
            return Err(WardrobeError::BadgeTierNotNext);
        }
        self.rank = self.minted;
        Ok(())
    }
}

/// Writes a freshly initialized [`RankAccount`] into `bytes` and returns a mutable view of it.
///
/// `bytes` must be exactly [`RANK_ACCOUNT_SIZE`] long.
pub fn initialize_rank_account<'a>(
    bytes: &'a mut [u8],
    avatar_mint: &Pubkey,
    bump: u8,
) -> Result<&'a mut RankAccount, WardrobeError> {
    // Safety: All bit patterns are valid for `RankAccount`, and the contents are overwritten
    // before the reference is returned.
    let account = unsafe { crate::state::transmutable::load_mut::<RankAccount>(bytes) }?;
    *account = RankAccount::init(avatar_mint, bump);
    Ok(account)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn new_rank() -> RankAccount {
        RankAccount::init(&[3u8; 32], 255)
    }

    #[test]
    fn badges_progress_in_tier_order() {
        let mut rank = new_rank();
        for tier in BadgeTier::iter() {
            rank.check_mint_allowed(tier).unwrap();
            rank.record_mint(tier);
            rank.redeem(tier).unwrap();
            assert_eq!(rank.rank(), tier as u8);
        }
    }

    #[test]
    fn cannot_skip_a_tier() {
        let mut rank = new_rank();
        assert_eq!(
            rank.check_mint_allowed(BadgeTier::Silver),
            Err(WardrobeError::BadgeTierNotNext)
        );
        rank.check_mint_allowed(BadgeTier::Bronze).unwrap();
        rank.record_mint(BadgeTier::Bronze);
        // Redeeming the wrong tier fails even with a badge outstanding.
        assert_eq!(
            rank.redeem(BadgeTier::Gold),
            Err(WardrobeError::BadgeTierNotNext)
        );
    }

    #[test]
    fn one_badge_outstanding_at_a_time() {
        let mut rank = new_rank();
        rank.check_mint_allowed(BadgeTier::Bronze).unwrap();
        rank.record_mint(BadgeTier::Bronze);
        assert_eq!(
            rank.check_mint_allowed(BadgeTier::Silver),
            Err(WardrobeError::BadgeAlreadyOutstanding)
        );
        // Even re-minting the same tier is blocked until redemption.
        assert_eq!(
            rank.check_mint_allowed(BadgeTier::Bronze),
            Err(WardrobeError::BadgeAlreadyOutstanding)
        );
    }

    #[test]
    fn redeem_requires_an_outstanding_badge() {
        let mut rank = new_rank();
        assert_eq!(
            rank.redeem(BadgeTier::Bronze),
            Err(WardrobeError::NoBadgeOutstanding)
        );
    }
}
