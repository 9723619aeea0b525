use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use wardrobe_interface::{
    error::WardrobeError,
    program,
    state::{rank::RankAccount, transmutable::load},
    utils::owned_by,
};

#[derive(Clone)]
pub struct RankAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> RankAccountInfo<'a> {
    /// Checks program ownership, the discriminant, and that the account belongs to
    /// `expected_mint`.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
    ) -> Result<RankAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &program::ID) {
            return Err(WardrobeError::InvalidRankAccountOwner.into());
        }

        let data = &info.try_borrow_data()?;
        // Safety: All bit patterns are valid for `RankAccount`.
        let rank = unsafe { load::<RankAccount>(data) }?;
        rank.verify_discriminant()?;

        if !pubkey_eq(&rank.avatar_mint, expected_mint) {
            return Err(WardrobeError::RankMintMismatch.into());
        }

        Ok(Self { info })
    }
}
