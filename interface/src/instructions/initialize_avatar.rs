use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::InstructionTag,
    pack::{write_bytes, UNINIT_BYTE},
};

/// Creates the avatar PDA for an avatar mint, recording empty trait slots and no alias.
///
/// The user must hold exactly one token of the avatar mint in the passed associated token
/// account.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` User account
///  1. `[WRITE]` Avatar account
///  2. `[READ]` Avatar mint
///  3. `[READ]` User's avatar associated token account
///  4. `[READ]` System program
pub struct InitializeAvatar<'a> {
    /// The user initializing the avatar, who pays for the PDA.
    pub user: &'a AccountInfo,
    /// The avatar account PDA.
    pub avatar_account: &'a AccountInfo,
    /// The avatar's mint account.
    pub avatar_mint: &'a AccountInfo,
    /// The user's associated token account holding the avatar token.
    pub avatar_ata: &'a AccountInfo,
    /// The system program.
    pub system_program: &'a AccountInfo,
    /// The bump for the avatar PDA.
    pub bump: u8,
}

impl InitializeAvatar<'_> {
    #[inline(always)]
    pub fn invoke(&self) -> ProgramResult {
        self.invoke_signed(&[])
    }

    #[inline(always)]
    pub fn invoke_signed(&self, signers_seeds: &[Signer]) -> ProgramResult {
        pinocchio::cpi::invoke_signed(
            &Instruction {
                program_id: &crate::program::ID,
                accounts: &self.create_account_metas(),
                data: &self.pack_instruction_data(),
            },
            &[
                self.user,
                self.avatar_account,
                self.avatar_mint,
                self.avatar_ata,
                self.system_program,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 5] {
        [
            AccountMeta::writable_signer(self.user.key()),
            AccountMeta::writable(self.avatar_account.key()),
            AccountMeta::readonly(self.avatar_mint.key()),
            AccountMeta::readonly(self.avatar_ata.key()),
            AccountMeta::readonly(self.system_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 2] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1]: the avatar PDA bump, 1 byte
        let mut data = [UNINIT_BYTE; 2];

        data[0].write(InstructionTag::InitializeAvatar as u8);
        write_bytes(&mut data[1..2], &[self.bump]);

        // Safety: All 2 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
