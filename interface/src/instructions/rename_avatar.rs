use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::{alias::AliasInstructionData, InstructionTag},
    pack::{write_bytes, Pack, UNINIT_BYTE},
};

/// Renames an avatar: burns one ID card token and overwrites the alias stored in the avatar
/// account.
///
/// Both the user and the wardrobe authority must sign.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` User account
///  1. `[SIGNER]` Authority account
///  2. `[WRITE]` Avatar account
///  3. `[READ]` Avatar mint
///  4. `[READ]` User's avatar associated token account
///  5. `[WRITE]` ID card mint
///  6. `[WRITE]` User's ID card associated token account
///  7. `[READ]` Token program
pub struct RenameAvatar<'a> {
    /// The user renaming the avatar.
    pub user: &'a AccountInfo,
    /// The wardrobe authority co-signing the rename.
    pub authority: &'a AccountInfo,
    /// The avatar account PDA.
    pub avatar_account: &'a AccountInfo,
    /// The avatar's mint account.
    pub avatar_mint: &'a AccountInfo,
    /// The user's associated token account holding the avatar token.
    pub avatar_ata: &'a AccountInfo,
    /// The ID card mint account.
    pub id_card_mint: &'a AccountInfo,
    /// The user's associated token account holding the ID card token.
    pub id_card_ata: &'a AccountInfo,
    /// The token program owning the ID card mint.
    pub token_program: &'a AccountInfo,
    /// The new alias.
    pub alias: AliasInstructionData,
}

impl RenameAvatar<'_> {
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
                self.authority,
                self.avatar_account,
                self.avatar_mint,
                self.avatar_ata,
                self.id_card_mint,
                self.id_card_ata,
                self.token_program,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 8] {
        [
            AccountMeta::writable_signer(self.user.key()),
            AccountMeta::readonly_signer(self.authority.key()),
            AccountMeta::writable(self.avatar_account.key()),
            AccountMeta::readonly(self.avatar_mint.key()),
            AccountMeta::readonly(self.avatar_ata.key()),
            AccountMeta::writable(self.id_card_mint.key()),
            AccountMeta::writable(self.id_card_ata.key()),
            AccountMeta::readonly(self.token_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 34] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..34]: the `AliasInstructionData`, 33 bytes
        let mut data = [UNINIT_BYTE; 34];

        data[0].write(InstructionTag::RenameAvatar as u8);
        write_bytes(&mut data[1..34], &self.alias.pack());

        // Safety: All 34 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
