use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::validation::{
    authority_info::AuthorityInfo, system_program_info::SystemProgramInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct RegisterTraitContext<'a> {
    pub authority: AuthorityInfo<'a>,
    pub trait_account: UninitializedAccountInfo<'a>,
    pub trait_mint: &'a AccountInfo,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> RegisterTraitContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<RegisterTraitContext<'a>, ProgramError> {
        let [authority, trait_account, trait_mint, system_program] = accounts else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let authority = AuthorityInfo::new(authority)?;
        let trait_account = UninitializedAccountInfo::new(trait_account)?;
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        Ok(Self {
            authority,
            trait_account,
            trait_mint,
            system_program,
        })
    }
}
