use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::{
    instructions::InstructionTag,
    pack::{write_bytes, UNINIT_BYTE},
};

/// Mints one ID card to the user for the fixed credit price.
///
/// The user's ID card associated token account is created idempotently, the treasury PDA signs
/// the mint, and the price is transferred from the user's credit account to the treasury credit
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
///  1. `[WRITE]` ID card mint
///  2. `[WRITE]` User's ID card associated token account
///  3. `[READ]` Treasury PDA
///  4. `[READ]` Credit mint
///  5. `[WRITE]` User's credit associated token account
///  6. `[WRITE]` Treasury credit token account
///  7. `[READ]` Credit token program
///  8. `[READ]` Token program
///  9. `[READ]` Associated token program
/// 10. `[READ]` System program
pub struct MintIdCard<'a> {
    /// The user minting, who signs the payment and pays for account creation.
    pub user: &'a AccountInfo,
    /// The ID card mint account.
    pub collectible_mint: &'a AccountInfo,
    /// The user's associated token account for the ID card mint.
    pub collectible_ata: &'a AccountInfo,
    /// The treasury PDA, mint authority of the ID card mint.
    pub treasury: &'a AccountInfo,
    /// The credit token mint account.
    pub credit_mint: &'a AccountInfo,
    /// The user's associated token account for the credit mint.
    pub user_credit_ata: &'a AccountInfo,
    /// The treasury's credit token account.
    pub treasury_credit_ata: &'a AccountInfo,
    /// The credit mint's token program.
    pub credit_token_program: &'a AccountInfo,
    /// The token program owning the collectible mints.
    pub token_program: &'a AccountInfo,
    /// The associated token program.
    pub associated_token_program: &'a AccountInfo,
    /// The system program.
    pub system_program: &'a AccountInfo,
    /// The bump for the treasury PDA.
    pub treasury_bump: u8,
}

impl MintIdCard<'_> {
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
                self.collectible_mint,
                self.collectible_ata,
                self.treasury,
                self.credit_mint,
                self.user_credit_ata,
                self.treasury_credit_ata,
                self.credit_token_program,
                self.token_program,
                self.associated_token_program,
                self.system_program,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 11] {
        [
            AccountMeta::writable_signer(self.user.key()),
            AccountMeta::writable(self.collectible_mint.key()),
            AccountMeta::writable(self.collectible_ata.key()),
            AccountMeta::readonly(self.treasury.key()),
            AccountMeta::readonly(self.credit_mint.key()),
            AccountMeta::writable(self.user_credit_ata.key()),
            AccountMeta::writable(self.treasury_credit_ata.key()),
            AccountMeta::readonly(self.credit_token_program.key()),
            AccountMeta::readonly(self.token_program.key()),
            AccountMeta::readonly(self.associated_token_program.key()),
            AccountMeta::readonly(self.system_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 2] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1]: the treasury PDA bump, 1 byte
        let mut data = [UNINIT_BYTE; 2];

        data[0].write(InstructionTag::MintIdCard as u8);
        write_bytes(&mut data[1..2], &[self.treasury_bump]);

        // Safety: All 2 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
