pub mod avatar;
pub mod collectible;
pub mod rank;
pub mod registered_trait;
pub mod supply;
pub mod transmutable;

use pinocchio::pubkey::Pubkey;

pub const U16_SIZE: usize = core::mem::size_of::<u16>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();

// Alias types for readability: little-endian integer bytes stored in account data.
pub type LeU16 = [u8; U16_SIZE];
pub type LeU64 = [u8; U64_SIZE];

pub const SYSTEM_PROGRAM_ID: Pubkey = [0u8; 32];
