//! PDA helpers for deriving `wardrobe` program addresses.

use solana_sdk::pubkey::Pubkey;

pub fn find_avatar_address(avatar_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[avatar_mint.as_ref(), wardrobe::AVATAR_SEED_STR],
        &wardrobe::ID.into(),
    )
}

pub fn find_trait_address(trait_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[trait_mint.as_ref(), wardrobe::TRAIT_SEED_STR],
        &wardrobe::ID.into(),
    )
}

pub fn find_rank_address(avatar_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[avatar_mint.as_ref(), wardrobe::RANK_SEED_STR],
        &wardrobe::ID.into(),
    )
}

pub fn find_supply_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[wardrobe::SUPPLY_SEED_STR], &wardrobe::ID.into())
}

pub fn find_treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[wardrobe::TREASURY_SEED_STR], &wardrobe::ID.into())
}
