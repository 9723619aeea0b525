use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::pubkey_eq,
};
use wardrobe_interface::{constants, error::WardrobeError};

use crate::validation::{
    mint_info::MintInfo, system_program_info::SystemProgramInfo,
    token_account_info::TokenAccountInfo, token_program_info::TokenProgramInfo,
};

/// The accounts shared by the `MintIdCard` and `MintBadge` instructions: the collectible being
/// minted and the credit payment route.
///
/// The treasury PDA and the collectible associated token account are left unchecked: the mint CPI
/// only succeeds if the treasury is the derivation the seeds sign for and the mint's authority,
/// and the associated token account derivation is enforced by the associated token program.
#[derive(Clone)]
pub struct MintCollectibleContext<'a> {
    pub user: &'a AccountInfo,
    pub collectible_mint: &'a AccountInfo,
    pub collectible_ata: &'a AccountInfo,
    pub treasury: &'a AccountInfo,
    pub credit_mint: MintInfo<'a>,
    pub user_credit_ata: TokenAccountInfo<'a>,
    pub treasury_credit_ata: TokenAccountInfo<'a>,
    pub credit_token_program: TokenProgramInfo<'a>,
    pub token_program: TokenProgramInfo<'a>,
    pub associated_token_program: &'a AccountInfo,
    pub system_program: SystemProgramInfo<'a>,
}

impl<'a> MintCollectibleContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<MintCollectibleContext<'a>, ProgramError> {
        let [user, collectible_mint, collectible_ata, treasury, credit_mint, user_credit_ata, treasury_credit_ata, credit_token_program, token_program, associated_token_program, system_program] =
            accounts
        else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let credit_mint = MintInfo::new_credit(credit_mint)?;

        // The user's signature is consumed by the credit transfer.
        let user_credit_ata =
            TokenAccountInfo::new(user_credit_ata, &constants::CREDIT_MINT, user.key())?;

        // The payment destination is pinned by address; its owner is the team wallet.
        if !pubkey_eq(treasury_credit_ata.key(), &constants::TREASURY_CREDIT_ATA) {
            return Err(WardrobeError::InvalidTreasuryCreditAccount.into());
        }
        let treasury_credit_ata = TokenAccountInfo::new_unchecked(treasury_credit_ata);

        // The credit mint may live on either token program; collectibles are legacy only.
        let credit_token_program = TokenProgramInfo::new(credit_token_program)?;
        let token_program = TokenProgramInfo::new_legacy(token_program)?;

        let system_program = SystemProgramInfo::new_unchecked(system_program);

        Ok(Self {
            user,
            collectible_mint,
            collectible_ata,
            treasury,
            credit_mint,
            user_credit_ata,
            treasury_credit_ata,
            credit_token_program,
            token_program,
            associated_token_program,
            system_program,
        })
    }
}
