use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::{
    error::WardrobeError,
    program,
    state::{supply::SupplyAccount, transmutable::load},
    utils::owned_by,
};

#[derive(Clone)]
pub struct SupplyAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> SupplyAccountInfo<'a> {
    /// Checks program ownership and the discriminant. The supply PDA is a singleton, so there is
    /// no derivation input to compare beyond that.
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<SupplyAccountInfo<'a>, ProgramError> {
        if !owned_by(info, &program::ID) {
            return Err(WardrobeError::InvalidSupplyAccountOwner.into());
        }

        let data = &info.try_borrow_data()?;
        // Safety: All bit patterns are valid for `SupplyAccount`.
        unsafe { load::<SupplyAccount>(data) }?.verify_discriminant()?;

        Ok(Self { info })
    }
}
