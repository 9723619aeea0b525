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
    state::{collectible::NUM_BADGE_TIERS, transmutable::Transmutable, LeU16},
};

#[repr(C)]
pub struct SupplyMaximaInstructionData {
    /// Per-tier maximum badge supply as LE bytes, bronze through diamond.
    maxima: [LeU16; NUM_BADGE_TIERS],
    /// The bump for the supply PDA.
    bump: u8,
}

impl SupplyMaximaInstructionData {
    pub fn new(maxima: [u16; NUM_BADGE_TIERS], bump: u8) -> Self {
        SupplyMaximaInstructionData {
            maxima: maxima.map(u16::to_le_bytes),
            bump,
        }
    }

    #[inline(always)]
    pub fn maxima(&self) -> [u16; NUM_BADGE_TIERS] {
        self.maxima.map(u16::from_le_bytes)
    }

    #[inline(always)]
    pub fn bump(&self) -> u8 {
        self.bump
    }
}

unsafe impl Pack<11> for SupplyMaximaInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 11]) {
        for (i, tier_max) in self.maxima.iter().enumerate() {
            write_bytes(&mut dst[i * 2..i * 2 + 2], tier_max);
        }
        write_bytes(&mut dst[10..11], &[self.bump]);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid: no enums, bools, or other types with invalid states.
unsafe impl Transmutable for SupplyMaximaInstructionData {
    const LEN: usize = 11;
}

const_assert_eq!(
    SupplyMaximaInstructionData::LEN,
    size_of::<SupplyMaximaInstructionData>()
);
const_assert_eq!(1, align_of::<SupplyMaximaInstructionData>());

/// Creates the singleton badge supply account with fixed per-tier maxima.
///
/// Only the wardrobe authority can initialize the supply.
///
/// # Caller guarantees
///
/// When invoking this instruction, caller must ensure that:
/// - WRITE accounts are not currently borrowed in *any* capacity.
/// - READ accounts are not currently mutably borrowed.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Authority account
///  1. `[WRITE]` Supply account
///  2. `[READ]` System program
pub struct InitializeSupply<'a> {
    /// The wardrobe authority, who pays for the PDA.
    pub authority: &'a AccountInfo,
    /// The supply account PDA.
    pub supply_account: &'a AccountInfo,
    /// The system program.
    pub system_program: &'a AccountInfo,
    /// Per-tier maximum badge supply, bronze through diamond.
    pub maxima: [u16; NUM_BADGE_TIERS],
    /// The bump for the supply PDA.
    pub bump: u8,
}

impl InitializeSupply<'_> {
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
            &[self.authority, self.supply_account, self.system_program],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::writable_signer(self.authority.key()),
            AccountMeta::writable(self.supply_account.key()),
            AccountMeta::readonly(self.system_program.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; 12] {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..12]: the `SupplyMaximaInstructionData`, 11 bytes
        let mut data = [UNINIT_BYTE; 12];

        data[0].write(InstructionTag::InitializeSupply as u8);
        write_bytes(
            &mut data[1..12],
            &SupplyMaximaInstructionData::new(self.maxima, self.bump).pack(),
        );

        // Safety: All 12 bytes were written to.
        unsafe { *(data.as_ptr() as *const _) }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::transmutable::load;

    use super::*;

    #[test]
    fn pack_then_load_roundtrip() {
        let maxima = [100, 75, 50, 25, 10];
        let packed = SupplyMaximaInstructionData::new(maxima, 253).pack();

        // Safety: all bit patterns are valid.
        let loaded = unsafe { load::<SupplyMaximaInstructionData>(&packed) }.unwrap();
        assert_eq!(loaded.maxima(), maxima);
        assert_eq!(loaded.bump(), 253);
    }
}
