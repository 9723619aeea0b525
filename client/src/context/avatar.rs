//! Avatar-level context deriving every wardrobe PDA for a user's avatar and building program
//! instructions against them.

use solana_address::Address;
use solana_instruction::{AccountMeta, Instruction};
use spl_associated_token_account_interface::address::get_associated_token_address;
use wardrobe_interface::{
    instructions::{
        alias::AliasInstructionData, initialize_supply::SupplyMaximaInstructionData,
        mint_badge::MintBadgeInstructionData, register_trait::RegisterTraitInstructionData,
        InstructionTag,
    },
    pack::Pack,
    state::{
        collectible::{Collectible, NUM_BADGE_TIERS},
        registered_trait::TraitKind,
    },
};

use crate::{
    pda::{
        find_avatar_address, find_rank_address, find_supply_address, find_trait_address,
        find_treasury_address,
    },
    ASSOCIATED_TOKEN_PROGRAM_ID, AUTHORITY_ADDRESS, CREDIT_MINT_ADDRESS, PROGRAM_ADDRESS,
    SPL_TOKEN_ID, SYSTEM_PROGRAM_ID, TREASURY_CREDIT_ATA_ADDRESS,
};

fn instruction_data(tag: InstructionTag, payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(tag as u8);
    data.extend_from_slice(payload);
    data
}

/// Client-side addresses for one user's avatar, with builders for every program instruction that
/// operates on it.
pub struct AvatarContext {
    pub user: Address,
    pub avatar_mint: Address,
    pub avatar_account: Address,
    pub avatar_bump: u8,
    pub avatar_ata: Address,
    pub rank_account: Address,
    pub rank_bump: u8,
    pub treasury: Address,
    pub treasury_bump: u8,
    /// The token program the credit mint lives on.
    pub credit_token_program: Address,
}

impl AvatarContext {
    pub fn new(user: Address, avatar_mint: Address) -> Self {
        let (avatar_account, avatar_bump) = find_avatar_address(&avatar_mint);
        let (rank_account, rank_bump) = find_rank_address(&avatar_mint);
        let (treasury, treasury_bump) = find_treasury_address();
        let avatar_ata = get_associated_token_address(&user, &avatar_mint);

        Self {
            user,
            avatar_mint,
            avatar_account,
            avatar_bump,
            avatar_ata,
            rank_account,
            rank_bump,
            treasury,
            treasury_bump,
            credit_token_program: SPL_TOKEN_ID,
        }
    }

    pub fn initialize_avatar(&self) -> Instruction {
        Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts: vec![
                AccountMeta::new(self.user, true),
                AccountMeta::new(self.avatar_account, false),
                AccountMeta::new_readonly(self.avatar_mint, false),
                AccountMeta::new_readonly(self.avatar_ata, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(InstructionTag::InitializeAvatar, &[self.avatar_bump]),
        }
    }

    pub fn equip_trait(&self, trait_mint: &Address) -> Instruction {
        let (trait_account, _) = find_trait_address(trait_mint);
        let trait_ata = get_associated_token_address(&self.user, trait_mint);

        Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts: vec![
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(AUTHORITY_ADDRESS, true),
                AccountMeta::new(self.avatar_account, false),
                AccountMeta::new_readonly(self.avatar_mint, false),
                AccountMeta::new_readonly(self.avatar_ata, false),
                AccountMeta::new_readonly(trait_account, false),
                AccountMeta::new(*trait_mint, false),
                AccountMeta::new(trait_ata, false),
                AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            ],
            data: instruction_data(InstructionTag::EquipTrait, &[]),
        }
    }

    /// The accounts shared by the ID card and badge mint instructions.
    fn collectible_metas(&self, asset: Collectible) -> Vec<AccountMeta> {
        let collectible_mint = Address::new_from_array(*asset.mint());
        let collectible_ata = get_associated_token_address(&self.user, &collectible_mint);
        let user_credit_ata = get_associated_token_address(&self.user, &CREDIT_MINT_ADDRESS);

        vec![
            AccountMeta::new(self.user, true),
            AccountMeta::new(collectible_mint, false),
            AccountMeta::new(collectible_ata, false),
            AccountMeta::new_readonly(self.treasury, false),
            AccountMeta::new_readonly(CREDIT_MINT_ADDRESS, false),
            AccountMeta::new(user_credit_ata, false),
            AccountMeta::new(TREASURY_CREDIT_ATA_ADDRESS, false),
            AccountMeta::new_readonly(self.credit_token_program, false),
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn mint_id_card(&self) -> Instruction {
        Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts: self.collectible_metas(Collectible::IdCard),
            data: instruction_data(InstructionTag::MintIdCard, &[self.treasury_bump]),
        }
    }

    pub fn mint_badge(&self, asset: Collectible) -> Instruction {
        let (supply_account, _) = find_supply_address();

        let mut accounts = self.collectible_metas(asset);
        accounts.extend([
            AccountMeta::new_readonly(self.avatar_mint, false),
            AccountMeta::new_readonly(self.avatar_ata, false),
            AccountMeta::new(self.rank_account, false),
            AccountMeta::new(supply_account, false),
        ]);

        Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts,
            data: instruction_data(
                InstructionTag::MintBadge,
                &MintBadgeInstructionData::new(asset as u8, self.treasury_bump, self.rank_bump)
                    .pack(),
            ),
        }
    }

    pub fn redeem_badge(&self, asset: Collectible) -> Instruction {
        let badge_mint = Address::new_from_array(*asset.mint());
        let badge_ata = get_associated_token_address(&self.user, &badge_mint);

        Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts: vec![
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(AUTHORITY_ADDRESS, true),
                AccountMeta::new_readonly(self.avatar_mint, false),
                AccountMeta::new_readonly(self.avatar_ata, false),
                AccountMeta::new(badge_mint, false),
                AccountMeta::new(badge_ata, false),
                AccountMeta::new(self.rank_account, false),
                AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            ],
            data: instruction_data(InstructionTag::RedeemBadge, &[asset as u8]),
        }
    }

    pub fn rename_avatar(&self, alias: &str) -> anyhow::Result<Instruction> {
        let id_card_mint = Address::new_from_array(*Collectible::IdCard.mint());
        let id_card_ata = get_associated_token_address(&self.user, &id_card_mint);

        let alias = AliasInstructionData::new(alias.as_bytes())
            .map_err(|e| anyhow::anyhow!("Invalid alias: {e}"))?;

        Ok(Instruction {
            program_id: PROGRAM_ADDRESS,
            accounts: vec![
                AccountMeta::new(self.user, true),
                AccountMeta::new_readonly(AUTHORITY_ADDRESS, true),
                AccountMeta::new(self.avatar_account, false),
                AccountMeta::new_readonly(self.avatar_mint, false),
                AccountMeta::new_readonly(self.avatar_ata, false),
                AccountMeta::new(id_card_mint, false),
                AccountMeta::new(id_card_ata, false),
                AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            ],
            data: instruction_data(InstructionTag::RenameAvatar, &alias.pack()),
        })
    }
}

/// Builds the authority-signed instruction registering `trait_mint` under `kind`.
pub fn register_trait(trait_mint: &Address, kind: TraitKind) -> Instruction {
    let (trait_account, bump) = find_trait_address(trait_mint);

    Instruction {
        program_id: PROGRAM_ADDRESS,
        accounts: vec![
            AccountMeta::new(AUTHORITY_ADDRESS, true),
            AccountMeta::new(trait_account, false),
            AccountMeta::new_readonly(*trait_mint, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: instruction_data(
            InstructionTag::RegisterTrait,
            &RegisterTraitInstructionData::new(kind as u8, bump).pack(),
        ),
    }
}

/// Builds the authority-signed instruction creating the badge supply account.
pub fn initialize_supply(maxima: [u16; NUM_BADGE_TIERS]) -> Instruction {
    let (supply_account, bump) = find_supply_address();

    Instruction {
        program_id: PROGRAM_ADDRESS,
        accounts: vec![
            AccountMeta::new(AUTHORITY_ADDRESS, true),
            AccountMeta::new(supply_account, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: instruction_data(
            InstructionTag::InitializeSupply,
            &SupplyMaximaInstructionData::new(maxima, bump).pack(),
        ),
    }
}
