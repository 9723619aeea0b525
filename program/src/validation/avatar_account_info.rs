use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use wardrobe_interface::{
    error::WardrobeError,
    program,
    state::{avatar::AvatarAccount, transmutable::load},
    utils::owned_by,
};

#[derive(Clone)]
pub struct AvatarAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> AvatarAccountInfo<'a> {
    /// Checks program ownership, the discriminant, and that the account belongs to
    /// `expected_mint`.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
    ) -> Result<AvatarAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &program::ID) {
            return Err(WardrobeError::InvalidAvatarAccountOwner.into());
        }

        let data = &info.try_borrow_data()?;
        // Safety: All bit patterns are valid for `AvatarAccount`.
        let avatar = unsafe { load::<AvatarAccount>(data) }?;
        avatar.verify_discriminant()?;

        if !pubkey_eq(&avatar.avatar_mint, expected_mint) {
            return Err(WardrobeError::AvatarMintMismatch.into());
        }

        Ok(Self { info })
    }
}
