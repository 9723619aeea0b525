use pinocchio::account_info::AccountInfo;
use wardrobe_interface::{error::WardrobeError, state::SYSTEM_PROGRAM_ID, utils::owned_by};

/// Represents a completely uninitialized account.
#[derive(Clone)]
pub struct UninitializedAccountInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> UninitializedAccountInfo<'a> {
    #[inline(always)]
    pub fn new(info: &'a AccountInfo) -> Result<UninitializedAccountInfo<'a>, WardrobeError> {
        if !info.data_is_empty() {
            return Err(WardrobeError::AlreadyInitializedAccount);
        }

        if !owned_by(info, &SYSTEM_PROGRAM_ID) {
            return Err(WardrobeError::NotOwnedBySystemProgram);
        }

        Ok(Self { info })
    }
}
