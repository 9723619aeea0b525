use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::InstructionTag,
    pack::{write_bytes, UNINIT_BYTE},
};

/// Redeems an outstanding badge: burns one badge token and raises the avatar's rank to the
/// badge's tier.
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
///  2. `[READ]` Avatar mint
///  3. `[READ]` User's avatar associated token account
///  4. `[WRITE]` Badge mint
///  5. `[WRITE]` User's badge associated token account
///  6. `[WRITE]` Rank account
///  7. `[READ]` Token program
pub struct RedeemBadge<'a> {
    /// The user redeeming the badge.
    pub user: &'a AccountInfo,
    /// The wardrobe authority co-signing the redemption.
    pub authority: &'a AccountInfo,
    /// The avatar's mint account.
    pub avatar_mint: &'a AccountInfo,
    /// The user's associated token account holding the avatar token.
    pub avatar_ata: &'a AccountInfo,
    /// The badge mint account.
    pub badge_mint: &'a AccountInfo,
    /// The user's associated token account holding the badge token.
    pub badge_ata: &'a AccountInfo,
    /// The rank account PDA.
    pub rank_account: &'a AccountInfo,
    /// The token program owning the badge mints.
    pub token_program: &'a AccountInfo,
    /// The collectible id of the badge to redeem.
    pub asset: u8,
}

impl RedeemBadge<'_> {
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
                self.avatar_mint,
                self.avatar_ata,
                self.badge_mint,
                self.badge_ata,
                self.rank_account,
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
            AccountMeta::readonly(self.avatar_mint.key()),
            AccountMeta::readonly(self.avatar_ata.key()),
            AccountMeta::writable(self.badge_mint.key()),
            AccountMeta::writable(self.badge_ata.key()),
            AccountMeta::writable(self.rank_account.key()),
            AccountMeta::readonly(self.token_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 2] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1]: the badge's collectible id, 1 byte
        let mut data = [UNINIT_BYTE; 2];

        data[0].write(InstructionTag::RedeemBadge as u8);
        write_bytes(&mut data[1..2], &[self.asset]);

        // Safety: All 2 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
