//! Account fabrication utilities for mollusk tests.
//!
//! Mollusk starts from an empty account store, so mints and token accounts can be placed at any
//! address, including the hard-coded collectible mint addresses.

use solana_account::Account;
use solana_address::Address;
use solana_program_error::ProgramError;
use solana_sdk::{program_option::COption, program_pack::Pack, rent::Rent};
use spl_token_interface::state::{Account as SplTokenAccount, AccountState, Mint};
use wardrobe_interface::error::WardrobeError;

use crate::{SPL_TOKEN_ID, SYSTEM_PROGRAM_ID};

/// Creates a system-owned account holding only lamports, i.e., a funded wallet.
pub fn create_mock_user_account(address: Address, lamports: u64) -> (Address, Account) {
    (
        address,
        Account {
            lamports,
            data: Vec::new(),
            owner: SYSTEM_PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}

/// Creates an initialized spl token mint account.
pub fn create_mint_account(
    mint_authority: Option<Address>,
    supply: u64,
    decimals: u8,
) -> Account {
    let mint = Mint {
        mint_authority: mint_authority.into(),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };

    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(mint, &mut data).expect("Should pack mint data");

    Account {
        lamports: Rent::default().minimum_balance(Mint::LEN),
        data,
        owner: SPL_TOKEN_ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Creates an initialized spl token account holding `amount` of `mint` for `owner`.
pub fn create_token_account(mint: &Address, owner: &Address, amount: u64) -> Account {
    let token_account = SplTokenAccount {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };

    let mut data = vec![0u8; SplTokenAccount::LEN];
    SplTokenAccount::pack(token_account, &mut data).expect("Should pack token account data");

    Account {
        lamports: Rent::default().minimum_balance(SplTokenAccount::LEN),
        data,
        owner: SPL_TOKEN_ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// The [`ProgramError`] a failed instruction reports for a [`WardrobeError`].
pub fn wardrobe_err(error: WardrobeError) -> ProgramError {
    ProgramError::Custom(error as u32)
}
