use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::validation::{
    system_program_info::SystemProgramInfo, token_account_info::TokenAccountInfo,
    uninitialized_account_info::UninitializedAccountInfo,
};

#[derive(Clone)]
pub struct InitializeAvatarContext<'a> {
    pub user: &'a AccountInfo,
    pub avatar_account: UninitializedAccountInfo<'a>,
    pub avatar_mint: &'a AccountInfo,
    pub avatar_ata: TokenAccountInfo<'a>,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> InitializeAvatarContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<InitializeAvatarContext<'a>, ProgramError> {
        let [user, avatar_account, avatar_mint, avatar_ata, system_program] = accounts else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        // The avatar PDA is created with signer seeds derived from the avatar mint, so the system
        // program rejects the transaction if the passed account isn't the right derivation. Only
        // emptiness and system ownership need to be checked here. The user's signature is consumed
        // by the system program's create instruction.
        let avatar_account = UninitializedAccountInfo::new(avatar_account)?;
        let system_program = SystemProgramInfo::new_unchecked(system_program);

        // Holding the single token of the avatar mint is the proof of avatar ownership.
        let avatar_ata = TokenAccountInfo::new_holding_one(avatar_ata, avatar_mint.key(), user.key())?;

        Ok(Self {
            user,
            avatar_account,
            avatar_mint,
            avatar_ata,
            system_program,
        })
    }
}
