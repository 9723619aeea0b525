use pinocchio::{account_info::AccountInfo, program_error::ProgramError};
use wardrobe_interface::error::WardrobeError;

use crate::{
    context::mint_collectible_context::MintCollectibleContext,
    validation::{supply_account_info::SupplyAccountInfo, token_account_info::TokenAccountInfo},
};

/// The account context for the `MintBadge` instruction: the shared collectible accounts plus the
/// avatar ownership proof and the rank and supply gates.
#[derive(Clone)]
pub struct MintBadgeContext<'a> {
    pub base: MintCollectibleContext<'a>,
    pub avatar_mint: &'a AccountInfo,
    pub avatar_ata: TokenAccountInfo<'a>,
    /// May still be uninitialized; the processor creates it on the avatar's first badge mint and
    /// validates it afterwards.
    pub rank_account: &'a AccountInfo,
    pub supply_account: SupplyAccountInfo<'a>,
}

impl<'a> MintBadgeContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<MintBadgeContext<'a>, ProgramError> {
        let [base_accounts @ .., avatar_mint, avatar_ata, rank_account, supply_account] = accounts
        else {
            return Err(WardrobeError::NotEnoughAccountKeys.into());
        };

        let base = MintCollectibleContext::load(base_accounts)?;

        let avatar_ata =
            TokenAccountInfo::new_holding_one(avatar_ata, avatar_mint.key(), base.user.key())?;
        let supply_account = SupplyAccountInfo::new(supply_account)?;

        Ok(Self {
            base,
            avatar_mint,
            avatar_ata,
            rank_account,
            supply_account,
        })
    }
}
