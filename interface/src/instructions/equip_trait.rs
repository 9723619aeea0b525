use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::instructions::InstructionTag;

/// Equips a registered trait onto an avatar: fills the slot for the trait's kind and burns one
/// trait token from the user.
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
///  5. `[READ]` Trait account
///  6. `[WRITE]` Trait mint
///  7. `[WRITE]` User's trait associated token account
///  8. `[READ]` Token program
pub struct EquipTrait<'a> {
    /// The user equipping the trait.
    pub user: &'a AccountInfo,
    /// The wardrobe authority co-signing the equip.
    pub authority: &'a AccountInfo,
    /// The avatar account PDA.
    pub avatar_account: &'a AccountInfo,
    /// The avatar's mint account.
    pub avatar_mint: &'a AccountInfo,
    /// The user's associated token account holding the avatar token.
    pub avatar_ata: &'a AccountInfo,
    /// The trait account PDA.
    pub trait_account: &'a AccountInfo,
    /// The trait's mint account.
    pub trait_mint: &'a AccountInfo,
    /// The user's associated token account holding the trait token.
    pub trait_ata: &'a AccountInfo,
    /// The token program owning the trait mint.
    pub token_program: &'a AccountInfo,
}

impl EquipTrait<'_> {
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
                data: &[InstructionTag::EquipTrait as u8],
            },
            &[
                self.user,
                self.authority,
                self.avatar_account,
                self.avatar_mint,
                self.avatar_ata,
                self.trait_account,
                self.trait_mint,
                self.trait_ata,
                self.token_program,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 9] {
        [
            AccountMeta::writable_signer(self.user.key()),
            AccountMeta::readonly_signer(self.authority.key()),
            AccountMeta::writable(self.avatar_account.key()),
            AccountMeta::readonly(self.avatar_mint.key()),
            AccountMeta::readonly(self.avatar_ata.key()),
            AccountMeta::readonly(self.trait_account.key()),
            AccountMeta::writable(self.trait_mint.key()),
            AccountMeta::writable(self.trait_ata.key()),
            AccountMeta::readonly(self.token_program.key()),
        ]
    }
}
