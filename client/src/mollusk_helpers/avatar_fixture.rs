use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;
use spl_associated_token_account_interface::address::get_associated_token_address;
use strum::IntoEnumIterator;
use wardrobe_interface::state::collectible::Collectible;

use crate::{
    context::avatar::AvatarContext,
    mollusk_helpers::utils::{create_mint_account, create_mock_user_account, create_token_account},
    new_wardrobe_mollusk_context, pda::find_treasury_address, AUTHORITY_ADDRESS,
    CREDIT_MINT_ADDRESS, DEFAULT_CREDIT_BALANCE, DEFAULT_MINT_DECIMALS,
    TREASURY_CREDIT_ATA_ADDRESS,
};

pub const DEFAULT_FUND_LAMPORTS: u64 = 100_000_000_000;

/// The standard mollusk test setup: a funded user holding one avatar NFT and one registrable
/// trait NFT, a funded authority, the credit token, and every collectible mint deployed at its
/// hard-coded address with the treasury PDA as mint authority.
pub struct AvatarFixture {
    pub user: Address,
    pub authority: Address,
    pub avatar_mint: Address,
    pub trait_mint: Address,
    pub avatar: AvatarContext,
}

impl AvatarFixture {
    pub fn new() -> Self {
        let user = Address::new_unique();
        let avatar_mint = Address::new_unique();

        Self {
            user,
            authority: AUTHORITY_ADDRESS,
            avatar_mint,
            trait_mint: Address::new_unique(),
            avatar: AvatarContext::new(user, avatar_mint),
        }
    }

    /// A second fixture sharing the same deployed mints but with its own user, avatar, and trait.
    ///
    /// The shared accounts (credit mint, collectibles, treasury credit account) are identical
    /// `(Address, Account)` pairs, so inserting both fixtures' accounts into one store is fine.
    pub fn another(&self) -> Self {
        Self::new()
    }

    /// The full standard account set to seed the mollusk account store with.
    pub fn accounts(&self) -> Vec<(Address, Account)> {
        let (treasury, _) = find_treasury_address();

        let mut accounts = vec![
            create_mock_user_account(self.user, DEFAULT_FUND_LAMPORTS),
            create_mock_user_account(self.authority, DEFAULT_FUND_LAMPORTS),
            // The avatar and trait NFTs: supply-1 mints fully held by the user.
            (self.avatar_mint, create_mint_account(None, 1, 0)),
            (
                get_associated_token_address(&self.user, &self.avatar_mint),
                create_token_account(&self.avatar_mint, &self.user, 1),
            ),
            (self.trait_mint, create_mint_account(None, 1, 0)),
            (
                get_associated_token_address(&self.user, &self.trait_mint),
                create_token_account(&self.trait_mint, &self.user, 1),
            ),
            // The credit token and the user's balance to pay with.
            (
                CREDIT_MINT_ADDRESS,
                create_mint_account(None, 1_000_000, DEFAULT_MINT_DECIMALS),
            ),
            (
                get_associated_token_address(&self.user, &CREDIT_MINT_ADDRESS),
                create_token_account(&CREDIT_MINT_ADDRESS, &self.user, DEFAULT_CREDIT_BALANCE),
            ),
            // The payment destination, owned by the team wallet.
            (
                TREASURY_CREDIT_ATA_ADDRESS,
                create_token_account(&CREDIT_MINT_ADDRESS, &Address::new_from_array([7u8; 32]), 0),
            ),
        ];

        // Every collectible mint, deployed at its hard-coded address with the treasury PDA as
        // mint authority.
        accounts.extend(Collectible::iter().map(|asset| {
            (
                Address::new_from_array(*asset.mint()),
                create_mint_account(Some(treasury), 0, 0),
            )
        }));

        accounts
    }

    /// Creates a [`MolluskContext`] seeded with this fixture's accounts.
    pub fn mollusk(&self) -> MolluskContext<HashMap<Address, Account>> {
        new_wardrobe_mollusk_context(self.accounts())
    }

    pub fn user_credit_ata(&self) -> Address {
        get_associated_token_address(&self.user, &CREDIT_MINT_ADDRESS)
    }

    pub fn collectible_ata(&self, asset: Collectible) -> Address {
        get_associated_token_address(&self.user, &Address::new_from_array(*asset.mint()))
    }

    pub fn trait_ata(&self) -> Address {
        get_associated_token_address(&self.user, &self.trait_mint)
    }
}

impl Default for AvatarFixture {
    fn default() -> Self {
        Self::new()
    }
}
