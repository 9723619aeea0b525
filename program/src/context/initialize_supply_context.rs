use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::validation::{
    authority_info::AuthorityInfo, system_program_info::SystemProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct InitializeSupplyContext<'a> {
    pub authority: AuthorityInfo<'a>,
    pub supply_account: UninitializedAccountInfo<'a>,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> InitializeSupplyContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<InitializeSupplyContext<'a>, ProgramError> {
        let [authority, supply_account, system_program] = accounts else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let authority = AuthorityInfo::new(authority)?;
        let supply_account = UninitializedAccountInfo::new(supply_account)?;
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        Ok(Self {
            authority,
            supply_account,
            system_program,
        })
    }
}
