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
pub struct RegisterTraitInstructionData {
    /// The trait's slot kind as its u8 repr.
    kind: u8,
    /// The bump for the trait PDA.
    bump: u8,
}

impl RegisterTraitInstructionData {
    pub fn new(kind: u8, bump: u8) -> Self {
        RegisterTraitInstructionData { kind, bump }
    }

    #[inline(always)]
    pub fn kind(&self) -> u8 {
        self.kind
    }

    #[inline(always)]
    pub fn bump(&self) -> u8 {
        self.bump
    }
}

unsafe impl Pack<2> for RegisterTraitInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 2]) {
        write_bytes(&mut dst[0..1], &[self.kind]);
        write_bytes(&mut dst[1..2], &[self.bump]);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: the kind byte is validated on use.
unsafe impl Transmutable for RegisterTraitInstructionData {
    const LEN: usize = 2;
}

const_assert_eq!(
    RegisterTraitInstructionData::LEN,
    size_of::<RegisterTraitInstructionData>()
);
const_assert_eq!(1, align_of::<RegisterTraitInstructionData>());

/// Registers a trait mint under a slot kind by creating its program-owned trait account.
///
/// Only the wardrobe authority can register traits.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Authority account
///  1. `[WRITE]` Trait account
///  2. `[READ]` Trait mint
///  3. `[READ]` System program
pub struct RegisterTrait<'a> {
    /// The wardrobe authority, who pays for the PDA.
    pub authority: &'a AccountInfo,
    /// The trait account PDA.
    pub trait_account: &'a AccountInfo,
    /// The trait's mint account.
    pub trait_mint: &'a AccountInfo,
    /// The system program.
    pub system_program: &'a AccountInfo,
    /// The trait's slot kind as its u8 repr.
    pub kind: u8,
    /// The bump for the trait PDA.
    pub bump: u8,
}

impl RegisterTrait<'_> {
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
                self.authority,
                self.trait_account,
                self.trait_mint,
                self.system_program,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::writable_signer(self.authority.key()),
            AccountMeta::writable(self.trait_account.key()),
            AccountMeta::readonly(self.trait_mint.key()),
            AccountMeta::readonly(self.system_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 3] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..3]: the `RegisterTraitInstructionData`, 2 bytes
        let mut data = [UNINIT_BYTE; 3];

        data[0].write(InstructionTag::RegisterTrait as u8);
        write_bytes(
            &mut data[1..3],
            &RegisterTraitInstructionData::new(self.kind, self.bump).pack(),
        );

        // Safety: All 3 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}
