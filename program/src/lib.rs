#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
mod shared;
mod validation;

pub use shared::seeds::{
    AVATAR_SEED_STR, RANK_SEED_STR, SUPPLY_SEED_STR, TRAIT_SEED_STR, TREASURY_SEED_STR,
};
#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pinocchio_pubkey::declare_id!("6BWDkBhfng443cWz8oZ74Mq12Zs3GvznD7cmV7GbfQTw");

use crate::instructions::*;
use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};
use wardrobe_interface::{error::WardrobeError, instructions::InstructionTag};

#[inline(always)]
pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(WardrobeError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::InitializeAvatar => process_initialize_avatar(accounts, remaining),
        InstructionTag::RegisterTrait => process_register_trait(accounts, remaining),
        InstructionTag::EquipTrait => process_equip_trait(accounts, remaining),
        InstructionTag::MintIdCard => process_mint_id_card(accounts, remaining),
        InstructionTag::MintBadge => process_mint_badge(accounts, remaining),
        InstructionTag::RedeemBadge => process_redeem_badge(accounts, remaining),
        InstructionTag::RenameAvatar => process_rename_avatar(accounts, remaining),
        InstructionTag::InitializeSupply => process_initialize_supply(accounts, remaining),
    }
}
