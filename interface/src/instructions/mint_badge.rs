use core::mem::MaybeUninit;

use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};
use static_assertions::const_assert_eq;

use crate::{
    instructions::InstructionTag,
    pack::{write_bytes, Pack, UNINIT_BYTE},
    state::transmutable::Transmutable,
};

#[repr(C)]
pub struct MintBadgeInstructionData {
    /// The collectible id of the badge to mint.
    asset: u8,
    /// The bump for the treasury PDA.
    treasury_bump: u8,
    /// The bump for the rank PDA.
    rank_bump: u8,
}

impl MintBadgeInstructionData {
    pub fn new(asset: u8, treasury_bump: u8, rank_bump: u8) -> Self {
        MintBadgeInstructionData {
            asset,
            treasury_bump,
            rank_bump,
        }
    }

    #[inline(always)]
    pub fn asset(&self) -> u8 {
        self.asset
    }

    #[inline(always)]
    pub fn treasury_bump(&self) -> u8 {
        self.treasury_bump
    }

    #[inline(always)]
    pub fn rank_bump(&self) -> u8 {
        self.rank_bump
    }
}

unsafe impl Pack<3> for MintBadgeInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 3]) {
        write_bytes(&mut dst[0..1], &[self.asset]);
        write_bytes(&mut dst[1..2], &[self.treasury_bump]);
        write_bytes(&mut dst[2..3], &[self.rank_bump]);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: the asset byte is validated on use.
unsafe impl Transmutable for MintBadgeInstructionData {
    const LEN: usize = 3;
}

const_assert_eq!(
    MintBadgeInstructionData::LEN,
    size_of::<MintBadgeInstructionData>()
);
const_assert_eq!(1, align_of::<MintBadgeInstructionData>());

/// Mints one badge to the user for the fixed credit price of its tier.
///
/// On top of the ID card flow, a badge mint requires the user to hold the avatar token, the rank
/// PDA to allow the tier (created on first use), and the tier's supply cap to not be exhausted.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` User account
///  1. `[WRITE]` Badge mint
///  2. `[WRITE]` User's badge associated token account
///  3. `[READ]` Treasury PDA
///  4. `[READ]` Credit mint
///  5. `[WRITE]` User's credit associated token account
///  6. `[WRITE]` Treasury credit token account
///  7. `[READ]` Credit token program
///  8. `[READ]` Token program
///  9. `[READ]` Associated token program
/// 10. `[READ]` System program
/// 11. `[READ]` Avatar mint
/// 12. `[READ]` User's avatar associated token account
/// 13. `[WRITE]` Rank account
/// 14. `[WRITE]` Supply account
pub struct MintBadge<'a> {
    /// The user minting, who signs the payment and pays for account creation.
    pub user: &'a AccountInfo,
    /// The badge mint account.
    pub collectible_mint: &'a AccountInfo,
    /// The user's associated token account for the badge mint.
    pub collectible_ata: &'a AccountInfo,
    /// The treasury PDA, mint authority of the badge mint.
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
    /// The avatar's mint account.
    pub avatar_mint: &'a AccountInfo,
    /// The user's associated token account holding the avatar token.
    pub avatar_ata: &'a AccountInfo,
    /// The rank account PDA.
    pub rank_account: &'a AccountInfo,
    /// The supply account PDA.
    pub supply_account: &'a AccountInfo,
    /// The collectible id of the badge to mint.
    pub asset: u8,
    /// The bump for the treasury PDA.
    pub treasury_bump: u8,
    /// The bump for the rank PDA.
    pub rank_bump: u8,
}

impl MintBadge<'_> {
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
                self.avatar_mint,
                self.avatar_ata,
                self.rank_account,
                self.supply_account,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 15] {
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
            AccountMeta::readonly(self.avatar_mint.key()),
            AccountMeta::readonly(self.avatar_ata.key()),
            AccountMeta::writable(self.rank_account.key()),
            AccountMeta::writable(self.supply_account.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 4] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..4]: the `MintBadgeInstructionData`, 3 bytes
        let mut data = [UNINIT_BYTE; 4];

        data[0].write(InstructionTag::MintBadge as u8);
        write_bytes(
            &mut data[1..4],
            &MintBadgeInstructionData::new(self.asset, self.treasury_bump, self.rank_bump).pack(),
        );

        // Safety: All 4 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
