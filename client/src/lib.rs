//! Client-side utilities for interacting with the wardrobe program.
//!
//! Includes instruction-building contexts, PDA derivations, mollusk test harness helpers, and
//! RPC transaction submission.

pub mod context;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod transactions;

pub use logs::LogColor;
use std::{collections::HashMap, path::PathBuf};

use mollusk_svm::{Mollusk, MolluskContext};
use solana_account::Account;
use solana_address::Address;
use solana_sdk::pubkey;

/// The wardrobe program id as a client-side address.
pub const PROGRAM_ADDRESS: Address = Address::new_from_array(wardrobe::ID);

/// The wardrobe authority wallet as a client-side address.
pub const AUTHORITY_ADDRESS: Address =
    Address::new_from_array(wardrobe_interface::constants::AUTHORITY);

/// The credit token mint as a client-side address.
pub const CREDIT_MINT_ADDRESS: Address =
    Address::new_from_array(wardrobe_interface::constants::CREDIT_MINT);

/// The treasury's credit token account as a client-side address.
pub const TREASURY_CREDIT_ATA_ADDRESS: Address =
    Address::new_from_array(wardrobe_interface::constants::TREASURY_CREDIT_ATA);

pub const SPL_TOKEN_ID: Address = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const SPL_TOKEN_2022_ID: Address = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
pub const SYSTEM_PROGRAM_ID: Address = pubkey!("11111111111111111111111111111111");

pub const DEFAULT_MINT_DECIMALS: u8 = 0;
pub const DEFAULT_CREDIT_BALANCE: u64 = 10_000;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `wardrobe.so` would return the absolute path version
/// of `../target/deploy/wardrobe`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// Creates and returns a [`MolluskContext`] with the following created and initialized:
/// - The `wardrobe` program
/// - The SPL token program
/// - The SPL token 2022 program
/// - The associated token program
/// - The accounts passed
pub fn new_wardrobe_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mut mollusk = Mollusk::new(&PROGRAM_ADDRESS, &deploy_file_to_program_name("wardrobe.so"));
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::token2022::add_program(&mut mollusk);
    mollusk_svm_programs_token::associated_token::add_program(&mut mollusk);

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    // Create each account passed in at its respective address using the specified account data.
    // This "funds" accounts in the sense that it will create the account with the specified
    // lamport balance in its account data.
    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}
