use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{pubkey_eq, Pubkey},
};
use wardrobe_interface::{
    error::WardrobeError,
    program,
    state::{
        registered_trait::{TraitAccount, TraitKind},
        transmutable::load,
    },
    utils::owned_by,
};

#[derive(Clone)]
pub struct TraitAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> TraitAccountInfo<'a> {
    /// Checks program ownership, the discriminant, and that the registration belongs to
    /// `expected_mint`.
    #[inline(always)]
    pub fn new(
        info: &'a AccountInfo,
        expected_mint: &Pubkey,
    ) -> Result<TraitAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &program::ID) {
            return Err(WardrobeError::InvalidTraitAccountOwner.into());
        }

        let data = &info.try_borrow_data()?;
        // Safety: All bit patterns are valid for `TraitAccount`.
        let registered = unsafe { load::<TraitAccount>(data) }?;
        registered.verify_discriminant()?;

        if !pubkey_eq(&registered.trait_mint, expected_mint) {
            return Err(WardrobeError::TraitMintMismatch.into());
        }

        Ok(Self { info })
    }

    /// Safely borrows the trait account's data to get the registered slot kind.
    pub fn kind(&self) -> Result<TraitKind, ProgramError> {
        let data = &self.info.try_borrow_data()?;
        // Safety: All bit patterns are valid for `TraitAccount`; the account was verified on
        // construction of Self.
        let registered = unsafe { load::<TraitAccount>(data) }?;
        Ok(registered.kind()?)
    }
}
